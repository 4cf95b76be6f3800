//! Script runner
//!
//! Plays the part of the login screen: feeds input events to the engine and
//! writes out whatever the engine publishes.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::Config;
use crate::form::{FormEngine, Subscription};
use crate::script::{self, InputEvent, ParsedLine};
use crate::shim::render::{render, OutputFormat, Record};

/// Collects everything an engine publishes, in order
#[derive(Debug)]
pub struct Recorder {
    records: Rc<RefCell<Vec<Record>>>,
    subscriptions: [Subscription; 2],
}

impl Recorder {
    /// Subscribe to `engine`. The current state is recorded immediately.
    pub fn attach(engine: &mut FormEngine) -> Self {
        let records = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&records);
        let state = engine.subscribe(move |output| {
            sink.borrow_mut().push(Record::State(output.clone()));
        });

        let sink = Rc::clone(&records);
        let login = engine.on_login_succeeded(move || {
            sink.borrow_mut().push(Record::LoginSucceeded);
        });

        Self {
            records,
            subscriptions: [state, login],
        }
    }

    /// Take the records published since the last drain
    pub fn drain(&self) -> Vec<Record> {
        self.records.borrow_mut().drain(..).collect()
    }

    pub fn detach(self, engine: &mut FormEngine) {
        for subscription in self.subscriptions {
            engine.unsubscribe(subscription);
        }
    }
}

/// Totals for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub events: usize,
    pub submissions: usize,
    pub logins: usize,
}

/// Apply events to the engine and return the published records
pub fn run_events(engine: &mut FormEngine, events: &[InputEvent]) -> Vec<Record> {
    let recorder = Recorder::attach(engine);
    for event in events {
        event.apply(engine);
    }
    let records = recorder.drain();
    recorder.detach(engine);
    records
}

/// Read a script line by line, apply each event as it arrives and write the
/// resulting records.
///
/// The engine's listeners are restored on return, whether the run succeeded
/// or not.
pub async fn run<R, W>(
    engine: &mut FormEngine,
    reader: R,
    writer: &mut W,
    format: OutputFormat,
) -> Result<RunSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let recorder = Recorder::attach(engine);
    let result = feed(engine, &recorder, reader, writer, format).await;
    recorder.detach(engine);

    let summary = result?;
    log::info!(
        "Processed {} events ({} submissions, {} logins)",
        summary.events,
        summary.submissions,
        summary.logins
    );
    Ok(summary)
}

async fn feed<R, W>(
    engine: &mut FormEngine,
    recorder: &Recorder,
    reader: R,
    writer: &mut W,
    format: OutputFormat,
) -> Result<RunSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = RunSummary::default();
    write_records(writer, &recorder.drain(), format, &mut summary).await?;

    let mut lines = reader.lines();
    let mut line_num = 0;
    while let Some(line) = lines.next_line().await.context("Failed to read script")? {
        line_num += 1;
        let event = match script::parse_line(line_num, &line)? {
            ParsedLine::Event(event) => event,
            ParsedLine::Comment | ParsedLine::Empty => continue,
        };

        summary.events += 1;
        if event.apply(engine).is_some() {
            summary.submissions += 1;
        }
        write_records(writer, &recorder.drain(), format, &mut summary).await?;
    }

    writer.flush().await?;
    Ok(summary)
}

async fn write_records<W>(
    writer: &mut W,
    records: &[Record],
    format: OutputFormat,
    summary: &mut RunSummary,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    for record in records {
        if *record == Record::LoginSucceeded {
            summary.logins += 1;
        }
        let mut line = render(record, format)?;
        line.push('\n');
        writer.write_all(line.as_bytes()).await?;
    }
    Ok(())
}

/// Run the configured script (or stdin) against a configured engine,
/// writing to stdout
pub async fn serve(config: Config) -> Result<()> {
    let mut engine = FormEngine::from_config(&config)?;
    let mut stdout = tokio::io::stdout();

    match &config.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            run(&mut engine, BufReader::new(file), &mut stdout, config.format).await?;
        }
        None => {
            let stdin = tokio::io::stdin();
            run(&mut engine, BufReader::new(stdin), &mut stdout, config.format).await?;
        }
    }

    Ok(())
}
