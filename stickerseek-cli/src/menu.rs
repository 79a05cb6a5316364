//! The interactive action loop.
//!
//! One iteration per screen: clear, show the menu, read an action, run it.
//! Result screens end with a move-on prompt so output stays visible until
//! the user acknowledges it. End of input anywhere quits cleanly.

use std::io::{self, Write};

use anyhow::{Context, Result};
use stickerseek::errors::StickerSeekError;
use stickerseek::history::{PageChoice, PageRecord, SearchTerm};
use stickerseek::session::SearchSession;

use crate::format;

/// Actions reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Leave the application.
    Quit,
    /// Prompt for a term and fetch its next unseen page.
    SearchNew,
    /// Fetch the next page of the most recent search.
    SearchNext,
    /// Show the most recently fetched page.
    PrintLast,
    /// Show every fetched page in order.
    PrintAll,
    /// Show one term's results, for one page or all of them.
    PrintSpecific,
    /// Show per-term link totals.
    Rank,
}

/// Parses a raw menu reply into an action.
///
/// Replies are read as numbers, so `"01"` selects action 1. Anything that is
/// not a number between 0 and 6 is rejected.
pub fn parse_action(input: &str) -> Option<MenuAction> {
    match input.trim().parse::<u32>().ok()? {
        0 => Some(MenuAction::Quit),
        1 => Some(MenuAction::SearchNew),
        2 => Some(MenuAction::SearchNext),
        3 => Some(MenuAction::PrintLast),
        4 => Some(MenuAction::PrintAll),
        5 => Some(MenuAction::PrintSpecific),
        6 => Some(MenuAction::Rank),
        _ => None,
    }
}

/// Presentation options for the loop.
#[derive(Debug, Clone)]
pub struct MenuOptions {
    /// Clear the terminal between screens.
    pub clear_screen: bool,
}

/// Runs the menu loop until the user quits or input ends.
pub async fn run(session: &mut SearchSession, options: &MenuOptions) -> Result<()> {
    loop {
        clear_screen(options);
        print!("{}", format::menu_screen());
        let Some(input) = prompt("What action would you like to choose: ")? else {
            return Ok(());
        };
        let Some(action) = parse_action(&input) else {
            println!("\nINVALID ACTION");
            continue;
        };
        match action {
            MenuAction::Quit => return Ok(()),
            MenuAction::SearchNew => search_new(session).await?,
            MenuAction::SearchNext => search_next(session, options).await?,
            MenuAction::PrintLast => print_last(session, options)?,
            MenuAction::PrintAll => print_all(session, options)?,
            MenuAction::PrintSpecific => print_specific(session, options)?,
            MenuAction::Rank => rank(session, options)?,
        }
    }
}

fn clear_screen(options: &MenuOptions) {
    if options.clear_screen {
        print!("\x1B[2J\x1B[1;1H");
    }
}

/// Reads one trimmed line; `None` means input has ended.
fn read_line() -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = io::stdin()
        .read_line(&mut line)
        .context("reading from stdin")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush().context("flushing stdout")?;
    read_line()
}

/// Holds the current screen until the user types anything.
fn pause() -> Result<()> {
    prompt("Type something to move on. ")?;
    Ok(())
}

fn report_search(outcome: Result<&PageRecord, StickerSeekError>) -> Result<()> {
    if let Err(err) = outcome {
        println!("Search failed: {err}");
        pause()?;
    }
    Ok(())
}

async fn search_new(session: &mut SearchSession) -> Result<()> {
    let term = loop {
        let Some(input) = prompt("What would you like to search: ")? else {
            return Ok(());
        };
        if !input.is_empty() {
            break input;
        }
    };
    report_search(session.search_new(&term).await)
}

async fn search_next(session: &mut SearchSession, options: &MenuOptions) -> Result<()> {
    match session.search_next().await {
        Err(StickerSeekError::NoHistory(_)) => {
            clear_screen(options);
            println!("Can't use next without previous search.");
            pause()
        }
        outcome => report_search(outcome),
    }
}

fn print_last(session: &SearchSession, options: &MenuOptions) -> Result<()> {
    clear_screen(options);
    match session.last_record() {
        Err(_) => {
            println!("Can't print last without previous search.");
            pause()
        }
        Ok(view) => {
            println!(
                "{}",
                format::page_heading(view.term.as_str(), view.page_number)
            );
            for link in view.links {
                println!("{link}");
            }
            println!("{}", format::RESULT_SEPARATOR);
            pause()
        }
    }
}

fn print_all(session: &SearchSession, options: &MenuOptions) -> Result<()> {
    clear_screen(options);
    if session.history().is_empty() {
        println!("Can't print without searches.");
        return pause();
    }
    print!("{}", format::page_listing(&session.pages()));
    println!("{}", format::RESULT_SEPARATOR);
    pause()
}

fn print_specific(session: &SearchSession, options: &MenuOptions) -> Result<()> {
    clear_screen(options);
    if session.history().is_empty() {
        println!("Can't print without searches.");
        return pause();
    }

    println!("Type previous search to print results.");
    for term in session.terms() {
        println!("{term}");
    }
    let Some(raw) = read_line()? else {
        return Ok(());
    };
    let term = SearchTerm::new(raw);
    let page_count = session.page_count(term.as_str());
    if page_count == 0 {
        println!("INVALID INPUT");
        return pause();
    }

    println!("{}", format::pages_prompt(page_count));
    let Some(reply) = read_line()? else {
        return Ok(());
    };
    let Ok(number) = reply.parse::<u32>() else {
        println!("INVALID INPUT");
        return pause();
    };

    clear_screen(options);
    let Some(screen) = specific_screen(session, &term, PageChoice::from_raw(number)) else {
        println!("INVALID INPUT");
        return pause();
    };
    print!("{screen}");
    println!("{}", format::RESULT_SEPARATOR);
    pause()
}

/// The screen for a term's chosen pages: heading plus links for a known
/// page selection, empty for a page past what was fetched, `None` for a
/// term the session has never seen.
fn specific_screen(
    session: &SearchSession,
    term: &SearchTerm,
    choice: PageChoice,
) -> Option<String> {
    let links = session.links_for(term.as_str(), choice).ok()?;
    let page_count = session.page_count(term.as_str());
    let mut out = String::new();
    match choice {
        PageChoice::AllPages => {
            out.push_str(&format::term_heading(term.as_str()));
            out.push('\n');
            for link in links {
                out.push_str(link);
                out.push('\n');
            }
        }
        PageChoice::Page(n) if n <= page_count => {
            out.push_str(&format::page_heading(term.as_str(), n));
            out.push('\n');
            for link in links {
                out.push_str(link);
                out.push('\n');
            }
        }
        // A page past what was fetched prints nothing, not even a heading.
        PageChoice::Page(_) => {}
    }
    Some(out)
}

fn rank(session: &SearchSession, options: &MenuOptions) -> Result<()> {
    clear_screen(options);
    print!("{}", format::rank_screen(&session.rank()));
    println!("{}", format::RESULT_SEPARATOR);
    pause()
}
