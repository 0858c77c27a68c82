//! The interactive explore/restart loop and the one-shot batch run.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::SessionResult;
use crate::filters::{self, FilterCriteria};
use crate::ingestion::IngestionOptions;
use crate::pager;
use crate::registry::DatasetRegistry;
use crate::reports;
use crate::trips::{self, TripTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Running,
    Ended,
}

/// Ties the registry and ingestion options to a console.
#[derive(Debug)]
pub struct Session<'a> {
    registry: &'a DatasetRegistry,
    options: &'a IngestionOptions,
}

impl<'a> Session<'a> {
    pub fn new(registry: &'a DatasetRegistry, options: &'a IngestionOptions) -> Self {
        Self { registry, options }
    }

    /// Run iterations until the user declines to restart.
    ///
    /// A load failure ends the session with [`crate::SessionError::DataUnavailable`]. Closing
    /// the input ends it with [`crate::SessionError::InputClosed`], except at the restart
    /// prompt, where it is treated as "no".
    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> SessionResult<()> {
        let mut state = SessionState::Running;
        let mut iteration = 0usize;
        while state == SessionState::Running {
            iteration += 1;
            let span = tracing::info_span!("iteration", iteration);
            let _guard = span.enter();
            state = self.iterate(console)?;
        }
        tracing::info!(iterations = iteration, "session ended");
        Ok(())
    }

    fn iterate<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> SessionResult<SessionState> {
        let criteria = filters::collect(console)?;
        let table = self.load(&criteria)?;

        reports::render(console.out(), &table)?;
        pager::display(console, table.dataset())?;

        match console.ask("\nWould you like to restart? Enter yes or no.\n") {
            Ok(answer) if answer.trim().eq_ignore_ascii_case("yes") => Ok(SessionState::Running),
            Ok(_) | Err(crate::SessionError::InputClosed) => Ok(SessionState::Ended),
            Err(e) => Err(e),
        }
    }

    /// Load the trips for `criteria` without prompting.
    pub fn load(&self, criteria: &FilterCriteria) -> SessionResult<TripTable> {
        Ok(trips::load(self.registry, criteria, self.options)?)
    }
}
