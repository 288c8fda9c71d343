//! Publish date inference for blog posts.

use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, Days, NaiveDate, Utc};
use regex::Regex;
use wpd_content::ContentNode;

/// Date prefix in post file names (`2020-10-10-webpack-5-release.md`).
static FILENAME_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})-").expect("invalid filename date regex")
});

/// Parenthesized date in post titles (`Webpack 5 release (2020-10-10)`).
static TITLE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((\d{4})-(\d{2})-(\d{2})\)").expect("invalid title date regex")
});

/// Infer the publish date of a post.
///
/// Tried in order:
/// 1. `YYYY-MM-DD-` prefix of the file name
/// 2. `(YYYY-MM-DD)` in the title
/// 3. modification time of `root_dir/<node path>`
/// 4. `now`
///
/// A matched date with a month outside `01..=12` or a day outside `01..=31` is
/// skipped. A day past the end of its month rolls over into the next month, so
/// `2020-02-30` is March 1st.
#[must_use]
pub fn extract_pub_date(
    node: &ContentNode,
    root_dir: &Path,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    if let Some(date) = node.name().and_then(|name| match_date(&FILENAME_DATE, name)) {
        return date;
    }
    if let Some(date) = node.title().and_then(|title| match_date(&TITLE_DATE, title)) {
        return date;
    }

    match node.path().map(|path| root_dir.join(path)) {
        Some(file) => match std::fs::metadata(&file).and_then(|meta| meta.modified()) {
            Ok(modified) => DateTime::<Utc>::from(modified),
            Err(e) => {
                tracing::warn!(
                    path = %file.display(),
                    error = %e,
                    "Cannot stat post, using current time"
                );
                now
            }
        },
        None => {
            tracing::warn!(
                url = node.url().unwrap_or_default(),
                "Post has no source path, using current time"
            );
            now
        }
    }
}

fn match_date(pattern: &Regex, text: &str) -> Option<DateTime<Utc>> {
    let caps = pattern.captures(text)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(day - 1)))?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}
