use tracing::debug;

use crate::analyzers::os::infer_os;
use crate::analyzers::rollup::rollup;
use crate::analyzers::types::OsFoldableCounts;
use crate::record::DeviceRecord;

/// Counts foldable (`"1"`) and non-foldable (`"0"`) records per inferred OS.
///
/// Any other flag, or none, is counted in neither column. Only OS families
/// that occur in the data get a row; records without a brand land in
/// `Unknown`.
pub fn foldable_by_os(records: &[DeviceRecord]) -> Vec<OsFoldableCounts> {
    let by_os = rollup(
        records,
        |r| infer_os(r.phone_brand.as_deref()),
        |group| {
            group
                .iter()
                .fold((0, 0), |(yes, no), r| match r.foldable.as_deref() {
                    Some("1") => (yes + 1, no),
                    Some("0") => (yes, no + 1),
                    _ => (yes, no),
                })
        },
    );

    let counts: Vec<OsFoldableCounts> = by_os
        .into_iter()
        .map(|(os, (yes, no))| OsFoldableCounts { os, yes, no })
        .collect();

    debug!(
        os_families = counts.len(),
        unflagged = records.len() - counts.iter().map(|c| c.yes + c.no).sum::<usize>(),
        "Foldable counts built"
    );

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::os::Os;

    fn phone(brand: Option<&str>, foldable: &str) -> DeviceRecord {
        DeviceRecord {
            phone_brand: brand.map(str::to_string),
            foldable: Some(foldable.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_foldable_counts_per_os() {
        let records = vec![
            phone(Some("Samsung"), "1"),
            phone(Some("apple"), "0"),
            phone(Some("Google"), "0"),
            phone(Some("SAMSUNG"), "1"),
            phone(Some("Apple"), "0"),
        ];
        let counts = foldable_by_os(&records);

        assert_eq!(
            counts,
            vec![
                OsFoldableCounts { os: Os::Android, yes: 2, no: 1 },
                OsFoldableCounts { os: Os::Ios, yes: 0, no: 2 },
            ]
        );
    }

    #[test]
    fn test_foldable_other_flags_counted_nowhere() {
        let records = vec![
            phone(Some("Motorola"), "1"),
            phone(Some("Motorola"), "yes"),
            phone(Some("Motorola"), ""),
            phone(None, "0"),
            DeviceRecord::default(),
        ];
        let counts = foldable_by_os(&records);

        assert_eq!(counts, vec![OsFoldableCounts { os: Os::Unknown, yes: 1, no: 1 }]);

        let flagged: usize = counts.iter().map(|c| c.yes + c.no).sum();
        assert_eq!(flagged, records.len() - 3);
    }

    #[test]
    fn test_foldable_serializes_labels() {
        let json = serde_json::to_string(&foldable_by_os(&[phone(Some("Apple"), "1")])).unwrap();
        assert_eq!(json, r#"[{"os":"iOS","Yes":1,"No":0}]"#);
    }

    #[test]
    fn test_foldable_empty() {
        assert!(foldable_by_os(&[]).is_empty());
    }
}
