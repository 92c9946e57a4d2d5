use super::Metrics;

/// One row of a [`Comparison`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonRow<L> {
    pub label: L,
    pub total_head_movement: u64,
    pub average_seek_distance: f64,
    pub average_wait_time: f64,
    pub max_wait_time: usize,

    /// Least movement among all rows as a percentage of this row's movement.
    ///
    /// The best row scores 100. A row that never moved also scores 100.
    pub efficiency: f64,
}

/// Side-by-side metrics for several runs over the same input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison<L> {
    /// Rows in the order the runs were given.
    pub rows: Vec<ComparisonRow<L>>,
}

impl<L> Comparison<L> {
    /// Returns the row with the least head movement.
    ///
    /// Ties go to the row given first. Returns `None` if there are no rows.
    #[must_use]
    pub fn best(&self) -> Option<&ComparisonRow<L>> {
        self.rows.iter().min_by_key(|row| row.total_head_movement)
    }

    /// Returns the row with the largest maximum wait, the run most prone to starvation.
    ///
    /// Ties go to the row given first. Returns `None` if there are no rows.
    #[must_use]
    pub fn most_starved(&self) -> Option<&ComparisonRow<L>> {
        self.rows
            .iter()
            .rev()
            .max_by_key(|row| row.max_wait_time)
    }
}

/// Builds a comparison from labelled metrics.
pub fn compare<'a, L>(runs: impl IntoIterator<Item = (L, &'a Metrics)>) -> Comparison<L> {
    let runs: Vec<(L, &Metrics)> = runs.into_iter().collect();
    let least = runs
        .iter()
        .map(|(_, metrics)| metrics.total_head_movement)
        .min()
        .unwrap_or(0);

    let rows = runs
        .into_iter()
        .map(|(label, metrics)| ComparisonRow {
            label,
            total_head_movement: metrics.total_head_movement,
            average_seek_distance: metrics.average_seek_distance,
            average_wait_time: metrics.average_wait_time,
            max_wait_time: metrics.max_wait_time,
            efficiency: efficiency(least, metrics.total_head_movement),
        })
        .collect();

    Comparison { rows }
}

#[allow(clippy::cast_precision_loss)]
fn efficiency(least: u64, movement: u64) -> f64 {
    if movement == 0 {
        100.0
    } else {
        least as f64 / movement as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn metrics(total_head_movement: u64, max_wait_time: usize) -> Metrics {
        Metrics {
            total_head_movement,
            wait_times: Vec::new(),
            average_wait_time: 0.0,
            max_wait_time,
            average_seek_distance: 0.0,
            final_position: 0,
        }
    }

    #[test]
    fn ranks_by_head_movement() {
        let fcfs = metrics(642, 6);
        let sstf = metrics(208, 6);
        let scan = metrics(348, 6);

        let comparison = compare([("FCFS", &fcfs), ("SSTF", &sstf), ("SCAN", &scan)]);

        assert_eq!(comparison.best().map(|row| row.label), Some("SSTF"));
        assert_relative_eq!(comparison.rows[1].efficiency, 100.0);
        assert_relative_eq!(comparison.rows[0].efficiency, 208.0 / 642.0 * 100.0);
        assert_relative_eq!(comparison.rows[2].efficiency, 208.0 / 348.0 * 100.0);
    }

    #[test]
    fn ties_go_to_the_first_run() {
        let a = metrics(100, 3);
        let b = metrics(100, 3);

        let comparison = compare([("a", &a), ("b", &b)]);

        assert_eq!(comparison.best().map(|row| row.label), Some("a"));
        assert_eq!(comparison.most_starved().map(|row| row.label), Some("a"));
    }

    #[test]
    fn flags_the_most_starved_run() {
        let fair = metrics(300, 2);
        let greedy = metrics(120, 9);

        let comparison = compare([("fair", &fair), ("greedy", &greedy)]);

        assert_eq!(comparison.most_starved().map(|row| row.label), Some("greedy"));
    }

    #[test]
    fn idle_runs_are_fully_efficient() {
        let idle = metrics(0, 0);

        let comparison = compare([("idle", &idle)]);

        assert_relative_eq!(comparison.rows[0].efficiency, 100.0);
    }

    #[test]
    fn no_runs_no_best() {
        let comparison = compare(Vec::<(&str, &Metrics)>::new());

        assert!(comparison.best().is_none());
    }
}
