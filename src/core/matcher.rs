use crate::core::models::MunicipalityRecord;
use crate::core::normalize::normalize;

pub const DEFAULT_LIMIT: usize = 10;

/// Queries shorter than this (after normalization) match nothing.
pub const MIN_QUERY_CHARS: usize = 2;

/// Ranks records against a query: labels starting with the query first, then
/// labels containing it elsewhere, each group in directory order.
///
/// Scanning stops as soon as `limit` prefix matches are found, so contains
/// matches further down the list are never considered in that case.
pub fn filter<'a>(
    records: &'a [MunicipalityRecord],
    query: &str,
    limit: usize,
) -> Vec<&'a MunicipalityRecord> {
    let needle = normalize(query.trim());
    let needle = needle.trim();

    if limit == 0 || needle.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let mut prefix = Vec::with_capacity(limit);
    let mut contains = Vec::new();

    for record in records {
        match record.normalized_label.find(needle) {
            Some(0) => {
                prefix.push(record);
                if prefix.len() >= limit {
                    break;
                }
            }
            Some(_) => contains.push(record),
            None => {}
        }
    }

    let room = limit.saturating_sub(prefix.len());
    prefix.extend(contains.into_iter().take(room));
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(name: &str, province: &str) -> MunicipalityRecord {
        MunicipalityRecord::new(name, "00", province, "")
    }

    fn labels<'a>(results: &[&'a MunicipalityRecord]) -> Vec<&'a str> {
        results.iter().map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn test_prefix_before_contains() {
        let records = vec![record("Villanueva de Madrid", "X"), record("Madrid", "Madrid")];

        let results = filter(&records, "mad", DEFAULT_LIMIT);
        assert_eq!(labels(&results), vec!["Madrid (Madrid)", "Villanueva de Madrid (X)"]);
    }

    #[test]
    fn test_short_queries_match_nothing() {
        let records = vec![record("Ávila", "Ávila"), record("Alcalá", "Madrid")];

        assert!(filter(&records, "", DEFAULT_LIMIT).is_empty());
        assert!(filter(&records, "a", DEFAULT_LIMIT).is_empty());
        assert!(filter(&records, "  Á  ", DEFAULT_LIMIT).is_empty());
        assert_eq!(filter(&records, "al", DEFAULT_LIMIT).len(), 1);
    }

    #[test]
    fn test_query_is_accent_and_case_insensitive() {
        let records = vec![record("Ávila", "Ávila"), record("Málaga", "Málaga")];

        assert_eq!(labels(&filter(&records, "AVI", DEFAULT_LIMIT)), vec!["Ávila (Ávila)"]);
        assert_eq!(labels(&filter(&records, " málag ", DEFAULT_LIMIT)), vec!["Málaga (Málaga)"]);
    }

    #[test]
    fn test_limit_respected() {
        let records: Vec<_> = (0..20).map(|i| record(&format!("Sant Joan {}", i), "Girona")).collect();

        let results = filter(&records, "sant", 10);
        assert_eq!(results.len(), 10);
        assert_eq!(results[0].label, "Sant Joan 0 (Girona)");
        assert_eq!(results[9].label, "Sant Joan 9 (Girona)");
    }

    #[test]
    fn test_backfill_keeps_bucket_order() {
        let mut records = Vec::new();
        for i in 0..5 {
            records.push(record(&format!("Villa Toro {}", i), "Zamora"));
            if i < 3 {
                records.push(record(&format!("Toro {}", i), "Zamora"));
            }
        }

        let results = filter(&records, "toro", 10);
        assert_eq!(
            labels(&results),
            vec![
                "Toro 0 (Zamora)",
                "Toro 1 (Zamora)",
                "Toro 2 (Zamora)",
                "Villa Toro 0 (Zamora)",
                "Villa Toro 1 (Zamora)",
                "Villa Toro 2 (Zamora)",
                "Villa Toro 3 (Zamora)",
                "Villa Toro 4 (Zamora)",
            ]
        );
    }

    #[test]
    fn test_early_stop_skips_tail() {
        let records = vec![
            record("Lugo A", "Lugo"),
            record("Lugo B", "Lugo"),
            record("Val de Lugo", "Lugo"),
        ];

        // Two prefix matches fill the limit before the contains match is seen.
        let results = filter(&records, "lugo", 2);
        assert_eq!(labels(&results), vec!["Lugo A (Lugo)", "Lugo B (Lugo)"]);
    }

    #[test]
    fn test_contains_collected_before_stop_is_not_used_when_full() {
        let records = vec![
            record("Alto Soria", "Soria"),
            record("Soria", "Soria"),
            record("Soria Baja", "Soria"),
        ];

        let results = filter(&records, "soria", 2);
        assert_eq!(labels(&results), vec!["Soria (Soria)", "Soria Baja (Soria)"]);
    }

    #[test]
    fn test_zero_limit_and_no_match() {
        let records = vec![record("Madrid", "Madrid")];

        assert!(filter(&records, "madrid", 0).is_empty());
        assert!(filter(&records, "zaragoza", DEFAULT_LIMIT).is_empty());
        assert!(filter(&[], "madrid", DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn test_matches_province_part_of_label() {
        let records = vec![record("Getafe", "Madrid")];

        let results = filter(&records, "madrid", DEFAULT_LIMIT);
        assert_eq!(labels(&results), vec!["Getafe (Madrid)"]);
    }
}
