use std::io::Read;
use std::sync::{mpsc, Arc};

use analyzer_client::{ClientConfig, NoHost, ReqwestAnalysisClient};
use analyzer_core::{update, AppState, AppViewModel, Msg};
use anyhow::Context;
use client_logging::client_info;

use crate::effects::EffectRunner;
use crate::render::TerminalRenderer;

pub enum Input {
    /// Raw terms and conditions text.
    Text(String),
    /// Page URL for the service to fetch and analyze.
    PageUrl(String),
    /// Fill the URL from the host browser's active tab.
    ActiveTab,
}

pub struct Options {
    pub input: Input,
}

impl Options {
    pub fn from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let input = match args.next().as_deref() {
            Some("--url") => {
                let url = args.next().context("--url needs a value")?;
                Input::PageUrl(url)
            }
            Some("--file") => {
                let path = args.next().context("--file needs a value")?;
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {path}"))?;
                Input::Text(text)
            }
            Some("--tab") => Input::ActiveTab,
            Some(other) => anyhow::bail!(
                "unknown argument {other:?}; usage: analyzer_app [--url URL | --file PATH | --tab] (default: read text from stdin)"
            ),
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("reading stdin")?;
                Input::Text(text)
            }
        };
        if args.next().is_some() {
            anyhow::bail!("too many arguments");
        }
        Ok(Self { input })
    }
}

/// One-shot run: seed the machine from the CLI input, pump messages until
/// the submission resolves and the reveal finishes (or fails).
pub fn run(options: Options) -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    client_info!("backend endpoint: {}", config.endpoint);
    let api = Arc::new(ReqwestAnalysisClient::new(config)?);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut runner = EffectRunner::new(api, Arc::new(NoHost), msg_tx.clone());
    let mut state = AppState::new();
    let mut renderer = TerminalRenderer::new();

    // Click Analyze unconditionally: the machine converts empty input
    // into a notice, which the loop below bails on instead of hanging.
    // The active-tab flow clicks once the URL resolution arrives.
    match &options.input {
        Input::Text(text) => {
            msg_tx.send(Msg::TextChanged(text.clone()))?;
            msg_tx.send(Msg::AnalyzeClicked)?;
        }
        Input::PageUrl(url) => {
            msg_tx.send(Msg::UrlChanged(url.clone()))?;
            msg_tx.send(Msg::AnalyzeClicked)?;
        }
        Input::ActiveTab => msg_tx.send(Msg::UseActiveTabClicked)?,
    }

    loop {
        let msg = msg_rx.recv()?;
        let tab_url_filled = matches!(&msg, Msg::ActiveTabResolved(Ok(_)));
        let view = dispatch(&mut state, &mut runner, &mut renderer, msg)?;

        if let Some(error) = view.error {
            anyhow::bail!(error);
        }
        if let Some(notice) = view.notice {
            anyhow::bail!(notice);
        }
        if tab_url_filled {
            msg_tx.send(Msg::AnalyzeClicked)?;
            continue;
        }
        if view.reveal_complete {
            return Ok(());
        }
    }
}

fn dispatch(
    state: &mut AppState,
    runner: &mut EffectRunner,
    renderer: &mut TerminalRenderer,
    msg: Msg,
) -> anyhow::Result<AppViewModel> {
    let current = std::mem::take(state);
    let (mut next, effects) = update(current, msg);
    runner.enqueue(effects);

    let view = next.view();
    let was_dirty = next.consume_dirty();
    *state = next;

    if was_dirty {
        let mut stdout = std::io::stdout();
        renderer.render(&mut stdout, &view)?;
    }
    Ok(view)
}
