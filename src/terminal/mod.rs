pub mod events;
pub mod state;
pub mod ui;

use color_eyre::eyre::Result;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;

use crate::webhook::MailWebhook;
use events::Action;
use state::BoardState;

pub fn run_tui(webhook: &dyn MailWebhook) -> Result<()> {
    color_eyre::install()?;

    let mut state = BoardState::new();

    let terminal = ratatui::init();
    let result = run(terminal, &mut state, webhook);
    ratatui::restore();

    result
}

fn run(
    mut terminal: DefaultTerminal,
    state: &mut BoardState,
    webhook: &dyn MailWebhook,
) -> Result<()> {
    // The board fetches once on startup; draw the loading frame first so
    // the blocking call doesn't show a blank screen.
    state.begin_load();
    terminal.draw(|f| ui::render(f, state))?;
    state.load_unread(webhook);

    loop {
        terminal.draw(|f| ui::render(f, state))?;

        if let Event::Key(key) = event::read()? {
            match events::handle_key(key, state) {
                Action::Quit => break,
                Action::FetchUnread => {
                    state.begin_load();
                    terminal.draw(|f| ui::render(f, state))?;
                    state.load_unread(webhook);
                }
                Action::Summarize => {
                    state.begin_summarize();
                    terminal.draw(|f| ui::render(f, state))?;
                    state.summarize_unread(webhook);
                }
                Action::None => {}
            }
        }
    }

    Ok(())
}
