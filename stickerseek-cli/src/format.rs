//! Screen rendering for the interactive menu.
//!
//! Everything here is a pure function from session views to the exact text
//! the terminal shows; the menu loop owns all the printing and reading.

use stickerseek::history::{PageView, RankEntry};

/// Rule printed above the action menu.
pub const MENU_SEPARATOR: &str = "---------------------------------------";

/// Rule printed between result blocks and before the move-on prompt.
pub const RESULT_SEPARATOR: &str = "-------------------------------------------------------";

/// The action menu, one option per line.
pub fn menu_screen() -> String {
    let mut out = String::new();
    for line in [
        MENU_SEPARATOR,
        "[0] Quit",
        "[1] Search New Term",
        "[2] Next Page",
        "[3] Print Last Search Results",
        "[4] Print All Searches",
        "[5] Print Specific Page Results",
        "[6] Rank of Stickers",
    ] {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Heading for a single page of results.
pub fn page_heading(term: &str, page_number: u32) -> String {
    format!("Search: {term} Page: {page_number}")
}

/// Heading for a term's results across all pages.
pub fn term_heading(term: &str) -> String {
    format!("Search: {term}")
}

/// Every recorded page as a separator-led block of heading plus links.
pub fn page_listing(pages: &[PageView<'_>]) -> String {
    let mut out = String::new();
    for view in pages {
        out.push_str(RESULT_SEPARATOR);
        out.push('\n');
        out.push_str(&page_heading(view.term.as_str(), view.page_number));
        out.push('\n');
        for link in view.links {
            out.push_str(link);
            out.push('\n');
        }
    }
    out
}

/// The rank listing: a header line, then `term: total` per searched term.
pub fn rank_screen(entries: &[RankEntry]) -> String {
    let mut out = String::from("List of Rank for Each Search.\n");
    for entry in entries {
        out.push_str(&format!("{}: {}\n", entry.term, entry.total_links));
    }
    out
}

/// The two-line page-number prompt for a term with `page_count` pages.
pub fn pages_prompt(page_count: u32) -> String {
    format!(
        "Which page of results or all page results would you like to access?({page_count} pages)\nType the page number or 0 for all of the pages"
    )
}
