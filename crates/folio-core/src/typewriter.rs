//! Typewriter text animations.
//!
//! Three independent machines share the same pattern — a countdown to the
//! next step, advanced by elapsed milliseconds — but own their state
//! separately; there is no shared scheduler and no cancellation. Within one
//! machine, steps execute strictly in order.
//!
//! - [`LogTypewriter`]: multi-line boot log that types, pauses, and loops
//!   forever.
//! - [`IntroTypewriter`]: one-shot reveal across name/role/description
//!   targets, flipping a fade-in marker for the call-to-action elements
//!   when done.
//! - [`CodeTypewriter`]: infinite type-then-delete loop over a code
//!   snippet, with typing and deleting mutually exclusive.

// ─────────────────────────────────────────────────────────────────
// Boot log (looping)
// ─────────────────────────────────────────────────────────────────

/// Delay between characters, in ms.
const LOG_CHAR_MS: u64 = 100;
/// Pause after finishing a line.
const LOG_LINE_PAUSE_MS: u64 = 1000;
/// Pause after the line break, before the next line starts.
const LOG_NEXT_LINE_MS: u64 = 600;
/// Pause after the final line, before clearing and restarting.
const LOG_CLEAR_MS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogPhase {
    Typing { line: usize, ch: usize },
    LinePause { line: usize },
    LineBreak { next_line: usize },
    ClearPause,
}

/// Infinite looping multi-line typewriter.
#[derive(Debug, Clone)]
pub struct LogTypewriter {
    lines: &'static [&'static str],
    display: String,
    phase: LogPhase,
    remaining_ms: u64,
}

impl LogTypewriter {
    pub fn new(lines: &'static [&'static str]) -> Self {
        Self {
            lines,
            display: String::new(),
            phase: LogPhase::Typing { line: 0, ch: 0 },
            remaining_ms: 0,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn advance(&mut self, mut dt_ms: u64) {
        if self.lines.is_empty() {
            return;
        }
        while dt_ms >= self.remaining_ms {
            dt_ms -= self.remaining_ms;
            self.step();
        }
        self.remaining_ms -= dt_ms;
    }

    fn step(&mut self) {
        match self.phase {
            LogPhase::Typing { line, ch } => {
                let chars: Vec<char> = self.lines[line].chars().collect();
                // An empty line has nothing to type; it is already done
                if chars.is_empty() {
                    self.phase = LogPhase::LinePause { line };
                    self.remaining_ms = LOG_LINE_PAUSE_MS;
                    return;
                }
                self.display.push(chars[ch]);
                if ch + 1 < chars.len() {
                    self.phase = LogPhase::Typing { line, ch: ch + 1 };
                    self.remaining_ms = LOG_CHAR_MS;
                } else {
                    self.phase = LogPhase::LinePause { line };
                    self.remaining_ms = LOG_LINE_PAUSE_MS;
                }
            }
            LogPhase::LinePause { line } => {
                if line + 1 < self.lines.len() {
                    self.display.push('\n');
                    self.phase = LogPhase::LineBreak {
                        next_line: line + 1,
                    };
                    self.remaining_ms = LOG_NEXT_LINE_MS;
                } else {
                    self.phase = LogPhase::ClearPause;
                    self.remaining_ms = LOG_CLEAR_MS;
                }
            }
            LogPhase::LineBreak { next_line } => {
                self.phase = LogPhase::Typing {
                    line: next_line,
                    ch: 0,
                };
                self.remaining_ms = 0;
            }
            LogPhase::ClearPause => {
                self.display.clear();
                self.phase = LogPhase::Typing { line: 0, ch: 0 };
                self.remaining_ms = 0;
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Intro (one-shot, three targets)
// ─────────────────────────────────────────────────────────────────

/// Pause between intro targets, in ms.
const INTRO_STEP_PAUSE_MS: u64 = 300;

/// One target of the intro sequence: full text + per-character delay.
#[derive(Debug, Clone, Copy)]
pub struct IntroStep {
    pub text: &'static str,
    pub char_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntroPhase {
    Typing { step: usize, ch: usize },
    StepPause { step: usize },
    Done,
}

/// One-shot multi-target typewriter (name, role, description).
#[derive(Debug, Clone)]
pub struct IntroTypewriter {
    steps: &'static [IntroStep],
    displays: Vec<String>,
    phase: IntroPhase,
    remaining_ms: u64,
    cta_visible: bool,
}

impl IntroTypewriter {
    pub fn new(steps: &'static [IntroStep]) -> Self {
        Self {
            steps,
            displays: vec![String::new(); steps.len()],
            phase: if steps.is_empty() {
                IntroPhase::Done
            } else {
                IntroPhase::Typing { step: 0, ch: 0 }
            },
            remaining_ms: 0,
            cta_visible: steps.is_empty(),
        }
    }

    /// Revealed text of target `i` so far.
    pub fn display(&self, i: usize) -> &str {
        self.displays.get(i).map(String::as_str).unwrap_or("")
    }

    /// Fade-in marker for the call-to-action elements, set once after the
    /// last target finishes.
    pub fn cta_visible(&self) -> bool {
        self.cta_visible
    }

    pub fn is_done(&self) -> bool {
        self.phase == IntroPhase::Done
    }

    pub fn advance(&mut self, mut dt_ms: u64) {
        while self.phase != IntroPhase::Done && dt_ms >= self.remaining_ms {
            dt_ms -= self.remaining_ms;
            self.step();
        }
        if self.phase != IntroPhase::Done {
            self.remaining_ms -= dt_ms;
        }
    }

    fn step(&mut self) {
        match self.phase {
            IntroPhase::Typing { step, ch } => {
                let target = self.steps[step];
                let chars: Vec<char> = target.text.chars().collect();
                // An empty target has nothing to type; it is already done
                if chars.is_empty() {
                    self.phase = IntroPhase::StepPause { step };
                    self.remaining_ms = INTRO_STEP_PAUSE_MS;
                    return;
                }
                self.displays[step].push(chars[ch]);
                if ch + 1 < chars.len() {
                    self.phase = IntroPhase::Typing { step, ch: ch + 1 };
                    self.remaining_ms = target.char_delay_ms;
                } else {
                    self.phase = IntroPhase::StepPause { step };
                    self.remaining_ms = INTRO_STEP_PAUSE_MS;
                }
            }
            IntroPhase::StepPause { step } => {
                if step + 1 < self.steps.len() {
                    self.phase = IntroPhase::Typing {
                        step: step + 1,
                        ch: 0,
                    };
                    self.remaining_ms = 0;
                } else {
                    self.phase = IntroPhase::Done;
                    self.cta_visible = true;
                }
            }
            IntroPhase::Done => {}
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Live code (type/delete loop)
// ─────────────────────────────────────────────────────────────────

/// Typing delay per character, in ms.
const CODE_TYPE_MS: u64 = 25;
/// Deletion delay per character.
const CODE_DELETE_MS: u64 = 15;
/// Pause after the snippet is fully typed, before deleting.
const CODE_PAUSE_MS: u64 = 1500;
/// Pause after the snippet is fully deleted, before retyping.
const CODE_RESET_MS: u64 = 500;

/// The type/delete loop is an explicit state machine; typing and deleting
/// are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePhase {
    Typing,
    Pausing,
    Deleting,
    Resetting,
}

/// Infinite type-then-delete typewriter simulating live code editing.
#[derive(Debug, Clone)]
pub struct CodeTypewriter {
    code: Vec<char>,
    display: String,
    typed: usize,
    phase: CodePhase,
    remaining_ms: u64,
}

impl CodeTypewriter {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.chars().collect(),
            display: String::new(),
            typed: 0,
            phase: CodePhase::Typing,
            remaining_ms: 0,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn phase(&self) -> CodePhase {
        self.phase
    }

    pub fn advance(&mut self, mut dt_ms: u64) {
        if self.code.is_empty() {
            return;
        }
        while dt_ms >= self.remaining_ms {
            dt_ms -= self.remaining_ms;
            self.step();
        }
        self.remaining_ms -= dt_ms;
    }

    fn step(&mut self) {
        match self.phase {
            CodePhase::Typing => {
                self.display.push(self.code[self.typed]);
                self.typed += 1;
                if self.typed < self.code.len() {
                    self.remaining_ms = CODE_TYPE_MS;
                } else {
                    self.phase = CodePhase::Pausing;
                    self.remaining_ms = CODE_PAUSE_MS;
                }
            }
            CodePhase::Pausing => {
                self.phase = CodePhase::Deleting;
                self.remaining_ms = CODE_DELETE_MS;
            }
            CodePhase::Deleting => {
                self.display.pop();
                if self.display.is_empty() {
                    self.phase = CodePhase::Resetting;
                    self.typed = 0;
                    self.remaining_ms = CODE_RESET_MS;
                } else {
                    self.remaining_ms = CODE_DELETE_MS;
                }
            }
            CodePhase::Resetting => {
                self.phase = CodePhase::Typing;
                self.remaining_ms = 0;
            }
        }
    }
}
