pub mod console;

pub use self::console::{Console, Terminal};

use crate::config::{InputPolicy, ReportFormat, SessionConfig};
use crate::error::{GwaError, GwaResult};
use crate::gwa;
use crate::reports;
use crate::subject::{ComponentGrades, ComponentWeights, EntryMode, Subject};
use tracing::{debug, info};

const DONE_SENTINEL: &str = "done";
const EXIT_WORD: &str = "exit";

/// Per-round state: the chosen mode and the subjects entered so far.
#[derive(Debug, Default, Clone)]
pub struct SessionContext {
    mode: Option<EntryMode>,
    subjects: Vec<Subject>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Option<EntryMode> {
        self.mode
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Starts a fresh round. Anything from an earlier round is dropped.
    pub fn begin_round(&mut self, mode: EntryMode) {
        self.subjects.clear();
        self.mode = Some(mode);
    }

    pub fn push(&mut self, subject: Subject) {
        self.subjects.push(subject);
    }

    pub fn reset(&mut self) {
        self.subjects.clear();
        self.mode = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    ModeSelect,
    Entry(EntryMode),
    Summary(EntryMode),
    Restart,
    Exit,
}

/// A numeric prompt and the noun used when asking again.
struct NumberPrompt {
    text: &'static str,
    noun: &'static str,
}

const UNITS: NumberPrompt = NumberPrompt {
    text: "Enter number of units: ",
    noun: "number of units",
};
const DIRECT_GRADE: NumberPrompt = NumberPrompt {
    text: "Enter grade (1.00-5.00): ",
    noun: "grade",
};
const PRELIM_WEIGHT: NumberPrompt = NumberPrompt {
    text: "Enter prelim weight (e.g., 0.3 for 30%): ",
    noun: "weight",
};
const MIDTERM_WEIGHT: NumberPrompt = NumberPrompt {
    text: "Enter midterm weight: ",
    noun: "weight",
};
const FINALS_WEIGHT: NumberPrompt = NumberPrompt {
    text: "Enter finals weight: ",
    noun: "weight",
};
const PRELIM_GRADE: NumberPrompt = NumberPrompt {
    text: "Enter prelim grade (%): ",
    noun: "percentage",
};
const MIDTERM_GRADE: NumberPrompt = NumberPrompt {
    text: "Enter midterm grade (%): ",
    noun: "percentage",
};
const FINALS_GRADE: NumberPrompt = NumberPrompt {
    text: "Enter finals grade (%): ",
    noun: "percentage",
};

/// Interactive calculator loop.
///
/// `ModeSelect -> Entry -> Summary -> Restart -> (ModeSelect | Exit)`.
/// End of input at any prompt ends the session cleanly.
pub struct Session<C: Console> {
    console: C,
    config: SessionConfig,
    context: SessionContext,
}

impl<C: Console> Session<C> {
    pub fn new(console: C, config: SessionConfig) -> Self {
        Self {
            console,
            config,
            context: SessionContext::new(),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn run(&mut self) -> GwaResult<()> {
        let mut phase = Phase::ModeSelect;
        loop {
            let next = match phase {
                Phase::ModeSelect => self.select_mode(),
                Phase::Entry(EntryMode::Direct) => self.direct_entry(),
                Phase::Entry(EntryMode::Weighted) => self.weighted_entry(),
                Phase::Summary(mode) => self.summarize(mode),
                Phase::Restart => self.restart_or_exit(),
                Phase::Exit => return Ok(()),
            };

            phase = match next {
                Ok(p) => p,
                Err(GwaError::InputClosed) => {
                    info!("Input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
            debug!(?phase, "session transition");
        }
    }

    fn select_mode(&mut self) -> GwaResult<Phase> {
        self.console.write_line("Grade and/or GWA Calculator")?;
        self.console.write_line("------------------------")?;
        let choice = self.console.read_line(
            "Do you want to calculate grades and then calculate GWA (1) or skip to GWA calculation? (2): ",
        )?;

        let mode = match choice.trim().parse::<EntryMode>() {
            Ok(mode) => mode,
            Err(_) => {
                debug!(input = %choice, "Rejected mode choice");
                let err = GwaError::InvalidChoice(choice);
                self.console.write_line(&err.to_string())?;
                return Ok(Phase::ModeSelect);
            }
        };

        let ack = match mode {
            EntryMode::Weighted => "Proceeding to grade calculation.",
            EntryMode::Direct => "Skipped to GWA calculation.",
        };
        self.console.write_line(ack)?;
        self.console.write_line(reports::RULE)?;

        self.context.begin_round(mode);
        info!(%mode, "Round started");
        Ok(Phase::Entry(mode))
    }

    fn direct_entry(&mut self) -> GwaResult<Phase> {
        while let Some(name) = self.read_subject_name()? {
            let units = self.read_units(true)?;
            let point = self.read_decimal(&DIRECT_GRADE, true)?;

            let subject = Subject::direct(name, units, point);
            debug!(?subject, "Subject added");
            self.context.push(subject);
        }
        Ok(Phase::Summary(EntryMode::Direct))
    }

    fn weighted_entry(&mut self) -> GwaResult<Phase> {
        while let Some(name) = self.read_subject_name()? {
            let units = self.read_units(false)?;
            let prelim = self.read_decimal(&PRELIM_WEIGHT, false)?;
            let midterm = self.read_decimal(&MIDTERM_WEIGHT, false)?;
            let finals = self.read_decimal(&FINALS_WEIGHT, false)?;

            // A bad weight triple throws away the whole subject, name included.
            let weights = match ComponentWeights::new(prelim, midterm, finals) {
                Ok(w) => w,
                Err(err @ GwaError::WeightSumMismatch(_)) => {
                    debug!(subject = %name, "{}", err);
                    self.console.write_line(&format!("Error: {}", err))?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let grades = ComponentGrades {
                prelim: self.read_decimal(&PRELIM_GRADE, false)?,
                midterm: self.read_decimal(&MIDTERM_GRADE, false)?,
                finals: self.read_decimal(&FINALS_GRADE, false)?,
            };

            let subject = Subject::weighted(name, units, weights, grades);
            debug!(?subject, "Subject added");
            self.console.write_line(&reports::render_subject_result(&subject))?;
            self.context.push(subject);
        }
        Ok(Phase::Summary(EntryMode::Weighted))
    }

    fn summarize(&mut self, mode: EntryMode) -> GwaResult<Phase> {
        if self.context.subjects().is_empty() {
            self.console.write_line(&GwaError::EmptySubjectList.to_string())?;
            return Ok(Phase::Restart);
        }

        let summary = gwa::summarize(mode, self.context.subjects())?;
        info!(%mode, gwa = summary.gwa, subjects = summary.subjects.len(), "Round complete");

        let rendered = match self.config.format {
            ReportFormat::Table => reports::render_summary(&summary),
            ReportFormat::Json => serde_json::to_string_pretty(&summary)?,
        };
        self.console.write_line(&rendered)?;
        Ok(Phase::Restart)
    }

    fn restart_or_exit(&mut self) -> GwaResult<Phase> {
        let answer = self
            .console
            .read_line("Press Enter to restart or type 'exit' to quit: ")?;

        if answer.trim().eq_ignore_ascii_case(EXIT_WORD) {
            self.console.write_line("Exiting the program.")?;
            return Ok(Phase::Exit);
        }

        debug!(
            dropped = self.context.subjects().len(),
            "Restarting, clearing subjects"
        );
        self.context.reset();
        Ok(Phase::ModeSelect)
    }

    /// `None` once the user types the sentinel.
    fn read_subject_name(&mut self) -> GwaResult<Option<String>> {
        self.console.write_line("")?;
        let name = self
            .console
            .read_line("Enter subject name (or 'done' to finish): ")?;
        let name = name.trim();
        if name.eq_ignore_ascii_case(DONE_SENTINEL) {
            return Ok(None);
        }
        Ok(Some(name.to_string()))
    }

    fn read_units(&mut self, always_retry: bool) -> GwaResult<u32> {
        self.read_number(&UNITS, always_retry, |s| {
            s.parse::<u32>().ok().filter(|&u| u > 0)
        })
    }

    fn read_decimal(&mut self, prompt: &NumberPrompt, always_retry: bool) -> GwaResult<f64> {
        self.read_number(prompt, always_retry, |s| {
            s.parse::<f64>().ok().filter(|v| v.is_finite())
        })
    }

    /// Asks until `parse` accepts the answer. Whether a rejected answer is
    /// asked again or ends the session depends on the input policy.
    fn read_number<T>(
        &mut self,
        prompt: &NumberPrompt,
        always_retry: bool,
        parse: impl Fn(&str) -> Option<T>,
    ) -> GwaResult<T> {
        let retry = always_retry || self.config.input_policy() == InputPolicy::Uniform;
        loop {
            let line = self.console.read_line(prompt.text)?;
            if let Some(value) = parse(line.trim()) {
                return Ok(value);
            }

            let err = GwaError::InvalidNumericInput {
                field: prompt.noun,
                input: line,
            };
            if !retry {
                return Err(err);
            }
            debug!("{}", err);
            self.console.write_line(&format!(
                "Invalid input. Please enter a valid {}.",
                prompt.noun
            ))?;
        }
    }
}
