//! Accordion widget state: at most one panel expanded at a time.

/// One accordion panel: a clickable header and a collapsible body.
#[derive(Debug, Clone)]
pub struct AccordionPanel {
    pub header: &'static str,
    pub body: &'static [&'static str],
}

impl AccordionPanel {
    /// Natural content height of the body, in rows.
    pub fn body_height(&self) -> u16 {
        self.body.len() as u16
    }
}

/// Expansion state over a fixed set of sibling panels.
#[derive(Debug, Clone)]
pub struct AccordionState {
    panels: Vec<AccordionPanel>,
    expanded: Option<usize>,
    selected: usize,
}

impl AccordionState {
    pub fn new(panels: Vec<AccordionPanel>) -> Self {
        Self {
            panels,
            expanded: None,
            selected: 0,
        }
    }

    pub fn panels(&self) -> &[AccordionPanel] {
        &self.panels
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Activate panel `index`'s header: collapse every other panel, then
    /// toggle the panel itself. Toggling the open panel closes it, leaving
    /// zero panels open.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.panels.len() {
            return;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn select_next(&mut self) {
        if !self.panels.is_empty() {
            self.selected = (self.selected + 1) % self.panels.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.panels.is_empty() {
            self.selected = (self.selected + self.panels.len() - 1) % self.panels.len();
        }
    }

    /// Toggle the currently selected panel.
    pub fn toggle_selected(&mut self) {
        self.toggle(self.selected);
    }
}
