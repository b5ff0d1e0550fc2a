//! Shared utility functions for CheckoutNet crates.

/// Metric label helpers
pub mod labels {
    /// Map an internal metric code to its display label.
    ///
    /// Any code other than the two speed metrics resolves to "latency";
    /// the mapping is total by design, unknown codes are not an error.
    pub fn metric_display_label(code: &str) -> &'static str {
        match code {
            "m_download_mbps" => "download mbps",
            "m_upload_mbps" => "upload mbps",
            _ => "latency",
        }
    }

    /// Capitalize a label for axis titles: first character uppercased,
    /// the rest lowercased ("download mbps" -> "Download mbps").
    pub fn capitalized(label: &str) -> String {
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
            None => String::new(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn known_codes_map_to_display_labels() {
            assert_eq!(metric_display_label("m_download_mbps"), "download mbps");
            assert_eq!(metric_display_label("m_upload_mbps"), "upload mbps");
            assert_eq!(metric_display_label("m_latency_ms"), "latency");
        }

        #[test]
        fn unknown_codes_fall_back_to_latency() {
            // The mapping is total: every unrecognized code resolves to latency.
            for code in ["", "m_jitter_ms", "download mbps", "M_DOWNLOAD_MBPS"] {
                assert_eq!(metric_display_label(code), "latency");
            }
        }

        #[test]
        fn capitalized_uppercases_only_the_first_letter() {
            assert_eq!(capitalized("download mbps"), "Download mbps");
            assert_eq!(capitalized("LATENCY"), "Latency");
            assert_eq!(capitalized(""), "");
        }
    }
}

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Coerce a raw `ds` value from the time-series CSV to a calendar date.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, and `YYYY-MM-DD HH:MM:SS`
    /// (the upstream export writes midnight timestamps on some runs).
    /// Anything else is an error; the caller treats it as fatal.
    pub fn coerce_ds(s: &str) -> anyhow::Result<NaiveDate> {
        let trimmed = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(date);
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y/%m/%d") {
            return Ok(date);
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
            return Ok(datetime.date());
        }
        anyhow::bail!("unparseable date '{}'", trimmed)
    }

    /// Format a NaiveDate as "YYYY-MM-DD" (the storage and D3 format).
    pub fn format_ds(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn coerce_accepts_iso_dates() {
            let date = coerce_ds("2024-01-31").unwrap();
            assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        }

        #[test]
        fn coerce_accepts_slash_dates_and_timestamps() {
            assert_eq!(format_ds(&coerce_ds("2024/02/05").unwrap()), "2024-02-05");
            assert_eq!(
                format_ds(&coerce_ds("2024-02-05 00:00:00").unwrap()),
                "2024-02-05"
            );
        }

        #[test]
        fn coerce_trims_whitespace() {
            assert_eq!(format_ds(&coerce_ds(" 2024-02-05 ").unwrap()), "2024-02-05");
        }

        #[test]
        fn coerce_rejects_garbage() {
            assert!(coerce_ds("not-a-date").is_err());
            assert!(coerce_ds("31-01-2024").is_err());
            assert!(coerce_ds("").is_err());
        }
    }
}
