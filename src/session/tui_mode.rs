//! Dashboard TUI execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::consts::cli_consts::{COMPLETION_QUEUE_SIZE, EVENT_QUEUE_SIZE};
use crate::ui;
use crate::workers::{ActionRunner, core::EventSender};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};
use tokio::sync::mpsc;

/// Runs the application in dashboard TUI mode
///
/// This function handles:
/// 1. Terminal setup and cleanup
/// 2. UI application initialization and execution
/// 3. Proper shutdown handling
///
/// # Arguments
/// * `session` - Session data from setup
///
/// # Returns
/// * `Ok(())` - TUI mode completed successfully
/// * `Err` - TUI mode failed
pub async fn run_tui_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    // Print session start message
    print_session_starting("dashboard", &session.wallet.address(), &session.environment);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Channels carrying worker events and action completions back to the UI
    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let (completion_sender, completion_receiver) = mpsc::channel(COMPLETION_QUEUE_SIZE);

    let runner = ActionRunner::new(
        session.rpc.clone(),
        session.wallet.clone(),
        EventSender::new(event_sender),
        completion_sender,
    );

    // Create the application and run it
    let app = ui::App::new(
        session.wallet.clone(),
        session.environment.clone(),
        runner,
        event_receiver,
        completion_receiver,
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle the result
    result?;

    // In-flight actions are short one-shot tasks; dropping them on exit
    // cannot lose a submitted transaction.
    print_session_shutdown();
    print_session_exit_success();

    Ok(())
}
