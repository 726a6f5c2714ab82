//! notas-viewer - terminal host for the NotasTareas screen.
//!
//! Builds the client stack from `NOTAS_BASE_URL`, prints every state the
//! view model publishes, and offers a retry on the error screen. Logs go to
//! stderr.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use notas_core::{
    render, ClientConfig, NetworkRepository, NotaTarea, NotasClient, NotasViewModel, Presenter,
    UiState, UreqTransport,
};
use tokio::runtime::Handle;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, PartialEq, Eq)]
enum Next {
    WaitForChange,
    Done,
}

/// Prints each screen to `output`. On the error screen the retry control is
/// the Enter key, read from `input`.
struct TerminalPresenter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    type Output = io::Result<Next>;

    fn loading(&mut self) -> io::Result<Next> {
        writeln!(self.output, "{}", render(&UiState::Loading))?;
        Ok(Next::WaitForChange)
    }

    fn grid(&mut self, notas: &[NotaTarea]) -> io::Result<Next> {
        writeln!(self.output, "{}", render(&UiState::Success(notas.to_vec())))?;
        Ok(Next::Done)
    }

    fn error(&mut self, retry: &dyn Fn()) -> io::Result<Next> {
        writeln!(self.output, "{}", render(&UiState::Error))?;
        writeln!(self.output, "press Enter to retry, q to quit")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 || line.trim().eq_ignore_ascii_case("q") {
            return Ok(Next::Done);
        }
        retry();
        Ok(Next::WaitForChange)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "starting");

    let repository = Arc::new(NetworkRepository::new(
        NotasClient::new(&config.base_url),
        UreqTransport::new(),
    ));
    let view_model = NotasViewModel::new(repository, Handle::current());
    let retry = view_model.retry_action();
    let mut states = view_model.subscribe();
    let mut presenter = TerminalPresenter {
        input: io::stdin().lock(),
        output: io::stdout(),
    };

    loop {
        let state = states.borrow_and_update().clone();
        // The error screen blocks on stdin.
        let next = tokio::task::block_in_place(|| state.present(&mut presenter, &retry))?;
        match next {
            Next::WaitForChange => states.changed().await?,
            Next::Done => break,
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
