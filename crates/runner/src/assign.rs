//! Static work assignment across parallel workers
//!
//! Row-groups are partitioned by position: the group at position `p` in the
//! stable enumeration of eligible groups belongs to worker `p mod W`. The
//! partition is complete and non-overlapping for any worker count, including
//! more workers than groups (those workers receive empty assignments).

use pagesweep_common::{Error, Result, RowGroup};

/// Return the subset of `groups` owned by `worker_index`.
///
/// Only groups whose name starts with `prefix` are eligible; the rest are
/// excluded from every worker's assignment. Splitting is per-group, never
/// per-URL. Bounds violations are caller errors and fail fast.
pub fn assign(
    groups: &[RowGroup],
    worker_index: usize,
    total_workers: usize,
    prefix: &str,
) -> Result<Vec<RowGroup>> {
    if total_workers == 0 {
        return Err(Error::InvalidConfig(
            "total workers must be at least 1".to_string(),
        ));
    }
    if worker_index >= total_workers {
        return Err(Error::WorkerOutOfRange {
            index: worker_index,
            total: total_workers,
        });
    }

    Ok(groups
        .iter()
        .filter(|g| g.name.starts_with(prefix))
        .enumerate()
        .filter(|(position, _)| position % total_workers == worker_index)
        .map(|(_, g)| g.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str, urls: usize) -> RowGroup {
        RowGroup::new(
            name,
            (0..urls)
                .map(|i| format!("https://www.example.com/us/{}/{}", name, i))
                .collect(),
        )
    }

    #[test]
    fn test_prefix_filter_and_split_across_two_workers() {
        let groups = vec![group("dcPages1", 2), group("dcPages2", 1), group("other", 5)];

        let worker0 = assign(&groups, 0, 2, "dcPages").unwrap();
        let worker1 = assign(&groups, 1, 2, "dcPages").unwrap();

        assert_eq!(worker0, vec![groups[0].clone()]);
        assert_eq!(worker1, vec![groups[1].clone()]);
    }

    #[test]
    fn test_five_groups_across_three_workers() {
        let groups: Vec<RowGroup> = (1..=5).map(|i| group(&format!("dcPages{}", i), 1)).collect();

        let names = |ws: Vec<RowGroup>| ws.into_iter().map(|g| g.name).collect::<Vec<_>>();

        assert_eq!(
            names(assign(&groups, 0, 3, "dcPages").unwrap()),
            vec!["dcPages1", "dcPages4"]
        );
        assert_eq!(
            names(assign(&groups, 1, 3, "dcPages").unwrap()),
            vec!["dcPages2", "dcPages5"]
        );
        assert_eq!(
            names(assign(&groups, 2, 3, "dcPages").unwrap()),
            vec!["dcPages3"]
        );
    }

    #[test]
    fn test_more_workers_than_groups() {
        let groups = vec![group("dcPages1", 1), group("dcPages2", 1)];

        for worker_index in 0..10 {
            let assigned = assign(&groups, worker_index, 10, "dcPages").unwrap();
            if worker_index < 2 {
                assert_eq!(assigned.len(), 1);
            } else {
                assert!(assigned.is_empty());
            }
        }
    }

    #[test]
    fn test_partition_is_complete_and_disjoint() {
        let groups: Vec<RowGroup> = (0..17)
            .map(|i| group(&format!("dcPages{:02}", i), i % 4))
            .collect();

        for total in [1, 2, 3, 5, 17, 23] {
            let mut seen = Vec::new();
            for worker_index in 0..total {
                for g in assign(&groups, worker_index, total, "dcPages").unwrap() {
                    assert!(!seen.contains(&g.name), "group assigned twice: {}", g.name);
                    seen.push(g.name);
                }
            }
            assert_eq!(seen.len(), groups.len());
        }
    }

    #[test]
    fn test_assignment_is_deterministic() {
        let groups: Vec<RowGroup> = (0..9).map(|i| group(&format!("dcPages{}", i), 2)).collect();

        let first = assign(&groups, 1, 4, "dcPages").unwrap();
        let second = assign(&groups, 1, 4, "dcPages").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_workers_is_a_config_error() {
        let groups = vec![group("dcPages1", 1)];
        assert!(matches!(
            assign(&groups, 0, 0, "dcPages"),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_out_of_range_index_fails_fast() {
        let groups = vec![group("dcPages1", 1)];
        assert!(matches!(
            assign(&groups, 3, 3, "dcPages"),
            Err(Error::WorkerOutOfRange { index: 3, total: 3 })
        ));
    }
}
