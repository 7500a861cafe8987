// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Swift/BAT transient monitor: light-curve retrieval with URL fallback.
//!
//! Unlike MAXI, there is no coordinate-derived identifier; the monitor names
//! its files after the source with all whitespace removed. Sources below the
//! detection threshold live in a separate "weak" directory, so two candidate
//! URLs are tried in a fixed order. Failing candidates are recoverable;
//! running out of candidates is the explicit [`SwiftFetch::NoData`] state,
//! not an error.

use itertools::Itertools;
use log::{debug, info, warn};
use reqwest::blocking::Client;
use vec1::{vec1, Vec1};

use super::{get_text, parse_fields, FetchError};
use crate::constants::{SWIFT_BASE_URL, SWIFT_HEADER_LINES};

/// The columns we consume: MJD, count rate, rate error. The monitor's files
/// carry more, which are ignored.
const NUM_COLUMNS: usize = 3;

/// One day of Swift/BAT observations: MJD, count rate and its 1-sigma error
/// \[counts/cm²/s\].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwiftRow {
    pub mjd: f64,
    pub rate: f64,
    pub err: f64,
}

/// A Swift/BAT light curve, in the archive's own row order (time-ascending).
#[derive(Debug, Clone, PartialEq)]
pub struct SwiftLightCurve {
    /// The URL the data came from.
    pub url: String,

    pub rows: Vec<SwiftRow>,
}

/// The outcome of a Swift fetch: either a parsed light curve, or the archive
/// has nothing for this source under any candidate URL.
#[derive(Debug, Clone, PartialEq)]
pub enum SwiftFetch {
    Data(SwiftLightCurve),
    NoData,
}

/// The monitor's file-naming convention: the source name with all
/// whitespace removed.
pub fn normalised_source_id(source_name: &str) -> String {
    source_name.split_whitespace().collect()
}

/// The candidate URLs for a source, in the order they are tried.
pub fn candidate_urls(source_name: &str) -> Vec1<String> {
    let id = normalised_source_id(source_name);
    vec1![
        format!("{SWIFT_BASE_URL}/weak/{id}.lc.txt"),
        format!("{SWIFT_BASE_URL}/{id}.lc.txt"),
    ]
}

/// Fetch the light curve for a source, trying each candidate URL in turn.
pub fn fetch(client: &Client, source_name: &str) -> SwiftFetch {
    fetch_with(source_name, |url| get_text(client, url))
}

/// The fallback loop, with the transport injected so it can be exercised
/// without a network. Each candidate must both download and parse to count
/// as a success; there are no retries within a candidate.
pub(crate) fn fetch_with<F>(source_name: &str, mut get: F) -> SwiftFetch
where
    F: FnMut(&str) -> Result<String, FetchError>,
{
    let urls = candidate_urls(source_name);
    for url in &urls {
        match get(url).and_then(|text| parse_table(url, &text)) {
            Ok(lc) => {
                info!("Fetched {} rows from {url}", lc.rows.len());
                return SwiftFetch::Data(lc);
            }
            Err(e) => warn!("{url} didn't work ({e}); trying the next candidate"),
        }
    }
    debug!("All candidate URLs failed: {}", urls.iter().join(", "));
    SwiftFetch::NoData
}

/// Parse a Swift/BAT light-curve file: [`SWIFT_HEADER_LINES`] header lines,
/// then whitespace-delimited numeric rows of which the first three columns
/// are used.
fn parse_table(url: &str, text: &str) -> Result<SwiftLightCurve, FetchError> {
    let mut rows = vec![];
    for (i, line) in text.lines().enumerate().skip(SWIFT_HEADER_LINES) {
        if line.trim().is_empty() {
            continue;
        }
        let fields = parse_fields(url, i + 1, line)?;
        if fields.len() < NUM_COLUMNS {
            return Err(FetchError::WrongColumnCount {
                url: url.to_string(),
                line: i + 1,
                expected: NUM_COLUMNS,
                found: fields.len(),
            });
        }
        rows.push(SwiftRow {
            mjd: fields[0],
            rate: fields[1],
            err: fields[2],
        });
    }
    if rows.is_empty() {
        return Err(FetchError::NoRows {
            url: url.to_string(),
        });
    }
    Ok(SwiftLightCurve {
        url: url.to_string(),
        rows,
    })
}

impl SwiftLightCurve {
    /// The rows that pass the validity predicates, in their original order:
    /// a positive count rate and an error below `max_error`.
    pub fn filtered(&self, max_error: f64) -> SwiftLightCurve {
        SwiftLightCurve {
            url: self.url.clone(),
            rows: self
                .rows
                .iter()
                .copied()
                .filter(|row| row.rate > 0.0 && row.err < max_error)
                .collect(),
        }
    }

    /// The inclusive plot window. Supplied bounds are used exactly as
    /// given; absent bounds default to the data's extremes.
    pub fn time_window(&self, start: Option<f64>, stop: Option<f64>) -> (f64, f64) {
        let data_min = self.rows.iter().map(|r| r.mjd).fold(f64::INFINITY, f64::min);
        let data_max = self
            .rows
            .iter()
            .map(|r| r.mjd)
            .fold(f64::NEG_INFINITY, f64::max);
        (start.unwrap_or(data_min), stop.unwrap_or(data_max))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use indoc::indoc;

    use super::*;

    // A plausible transient-monitor file: the real ones carry many more
    // columns, but only the first three matter here.
    const TABLE: &str = indoc! {"
        # Swift/BAT transient monitor
        # Source: GX 339-4
        # 15-50 keV
        # MJD RATE ERROR ...
        #
        59000.5  0.0121  0.0018  2020  152
        59001.5 -0.0003  0.0021  2020  153
        59002.5  0.0145  0.0017  2020  154
    "};

    fn weak_url() -> String {
        candidate_urls("GX 339-4").first().clone()
    }

    fn standard_url() -> String {
        candidate_urls("GX 339-4").last().clone()
    }

    #[test]
    fn source_id_strips_all_whitespace() {
        assert_eq!(normalised_source_id("GX 339-4"), "GX339-4");
        assert_eq!(normalised_source_id("  4U  1630-47 "), "4U1630-47");
    }

    #[test]
    fn candidates_try_the_weak_directory_first() {
        let urls = candidate_urls("GX 339-4");
        assert_eq!(urls.len(), 2);
        assert_eq!(
            urls.first(),
            "https://swift.gsfc.nasa.gov/results/transients/weak/GX339-4.lc.txt"
        );
        assert_eq!(
            urls.last(),
            "https://swift.gsfc.nasa.gov/results/transients/GX339-4.lc.txt"
        );
    }

    #[test]
    fn parse_skips_header_lines_and_extra_columns() {
        let lc = parse_table("test://swift", TABLE).unwrap();
        assert_eq!(lc.rows.len(), 3);
        assert_abs_diff_eq!(lc.rows[0].mjd, 59000.5);
        assert_abs_diff_eq!(lc.rows[0].rate, 0.0121);
        assert_abs_diff_eq!(lc.rows[0].err, 0.0018);
        assert_abs_diff_eq!(lc.rows[1].rate, -0.0003);
    }

    #[test]
    fn parse_rejects_too_few_columns() {
        let text = "1\n2\n3\n4\n5\n59000.5 0.0121\n";
        assert!(matches!(
            parse_table("test://swift", text),
            Err(FetchError::WrongColumnCount {
                line: 6,
                expected: 3,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn parse_rejects_header_only_files() {
        let text = "1\n2\n3\n4\n5\n";
        assert!(matches!(
            parse_table("test://swift", text),
            Err(FetchError::NoRows { .. })
        ));
    }

    #[test]
    fn first_candidate_wins_when_it_works() {
        let fetched = fetch_with("GX 339-4", |url| {
            assert_eq!(url, weak_url());
            Ok(TABLE.to_string())
        });
        match fetched {
            SwiftFetch::Data(lc) => assert_eq!(lc.url, weak_url()),
            SwiftFetch::NoData => panic!("expected data from the weak URL"),
        }
    }

    #[test]
    fn fallback_to_the_second_candidate() {
        let mut attempts = vec![];
        let fetched = fetch_with("GX 339-4", |url| {
            attempts.push(url.to_string());
            if url == weak_url() {
                Err(FetchError::NoRows {
                    url: url.to_string(),
                })
            } else {
                Ok(TABLE.to_string())
            }
        });
        assert_eq!(attempts, vec![weak_url(), standard_url()]);
        match fetched {
            SwiftFetch::Data(lc) => {
                assert_eq!(lc.url, standard_url());
                assert_eq!(lc.rows.len(), 3);
            }
            SwiftFetch::NoData => panic!("expected data from the second URL"),
        }
    }

    #[test]
    fn exhausted_candidates_are_no_data() {
        let mut attempts = 0;
        let fetched = fetch_with("GX 339-4", |url| {
            attempts += 1;
            Err(FetchError::NoRows {
                url: url.to_string(),
            })
        });
        assert_eq!(attempts, 2);
        assert_eq!(fetched, SwiftFetch::NoData);
    }

    #[test]
    fn unparseable_bodies_also_fall_back() {
        // A candidate that downloads but doesn't parse is as bad as one
        // that 404s.
        let fetched = fetch_with("GX 339-4", |url| {
            if url == weak_url() {
                Ok("<html>not a light curve</html>".to_string())
            } else {
                Ok(TABLE.to_string())
            }
        });
        match fetched {
            SwiftFetch::Data(lc) => assert_eq!(lc.url, standard_url()),
            SwiftFetch::NoData => panic!("expected fallback to the second URL"),
        }
    }

    fn curve(rows: Vec<SwiftRow>) -> SwiftLightCurve {
        SwiftLightCurve {
            url: "test://swift".to_string(),
            rows,
        }
    }

    #[test]
    fn filter_drops_invalid_rows_and_keeps_order() {
        let lc = curve(vec![
            SwiftRow {
                mjd: 59000.5,
                rate: 0.0121,
                err: 0.0018,
            },
            SwiftRow {
                mjd: 59001.5,
                rate: -0.0003,
                err: 0.0021,
            },
            SwiftRow {
                mjd: 59002.5,
                rate: 0.0145,
                err: 0.0500,
            },
            SwiftRow {
                mjd: 59003.5,
                rate: 0.0101,
                err: 0.0019,
            },
        ]);
        let filtered = lc.filtered(0.04);
        let mjds: Vec<f64> = filtered.rows.iter().map(|r| r.mjd).collect();
        assert_eq!(mjds, vec![59000.5, 59003.5]);
    }

    #[test]
    fn filter_threshold_is_exclusive() {
        let lc = curve(vec![SwiftRow {
            mjd: 59000.5,
            rate: 0.01,
            err: 0.04,
        }]);
        // err == threshold is dropped.
        assert!(lc.filtered(0.04).rows.is_empty());
    }

    #[test]
    fn time_window_defaults_to_the_data() {
        let lc = parse_table("test://swift", TABLE).unwrap();
        let (start, stop) = lc.time_window(None, None);
        assert_abs_diff_eq!(start, 59000.5);
        assert_abs_diff_eq!(stop, 59002.5);
    }

    #[test]
    fn time_window_uses_supplied_bounds_exactly() {
        let lc = parse_table("test://swift", TABLE).unwrap();
        let (start, stop) = lc.time_window(Some(58990.0), Some(59100.0));
        assert_abs_diff_eq!(start, 58990.0);
        assert_abs_diff_eq!(stop, 59100.0);
        // And each bound can be supplied independently.
        let (start, stop) = lc.time_window(None, Some(59100.0));
        assert_abs_diff_eq!(start, 59000.5);
        assert_abs_diff_eq!(stop, 59100.0);
    }
}
