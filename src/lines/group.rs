use crate::runs::Run;
use serde::Serialize;

/// Cluster of runs at nearby fixed coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineGroup {
    /// Rounded mean of the member coordinates (halves round up).
    pub avg_pos: i64,
    /// Coordinate of the first longest member.
    pub pos: u32,
    /// Length of the longest member.
    pub max_len: u32,
    pub members: usize,
    pub first_pos: u32,
    pub last_pos: u32,
}

impl LineGroup {
    /// Distance between the outermost member coordinates.
    pub fn span(&self) -> u32 {
        self.last_pos - self.first_pos
    }
}

/// Group runs by their fixed coordinate.
///
/// Runs are sorted by `pos` and swept once. A run joins the current group when
/// it is within `tolerance` of the previous run in sorted order, so a chain of
/// close runs forms one group even if its total span exceeds `tolerance`.
pub fn group_lines(runs: &[Run], tolerance: u32) -> Vec<LineGroup> {
    let mut sorted: Vec<&Run> = runs.iter().collect();
    sorted.sort_by_key(|r| r.pos);

    let mut groups = Vec::new();
    let mut acc: Option<GroupAccumulator> = None;
    for run in sorted {
        let joins = matches!(&acc, Some(cur) if run.pos - cur.last_pos <= tolerance);
        if joins {
            if let Some(cur) = acc.as_mut() {
                cur.push(run);
            }
            continue;
        }
        if let Some(done) = acc.take() {
            groups.push(done.finish());
        }
        acc = Some(GroupAccumulator::start(run));
    }
    if let Some(done) = acc {
        groups.push(done.finish());
    }
    groups
}

struct GroupAccumulator {
    sum_pos: u64,
    count: u64,
    longest_pos: u32,
    max_len: u32,
    first_pos: u32,
    last_pos: u32,
}

impl GroupAccumulator {
    fn start(run: &Run) -> Self {
        Self {
            sum_pos: run.pos as u64,
            count: 1,
            longest_pos: run.pos,
            max_len: run.len,
            first_pos: run.pos,
            last_pos: run.pos,
        }
    }

    fn push(&mut self, run: &Run) {
        self.sum_pos += run.pos as u64;
        self.count += 1;
        if run.len > self.max_len {
            self.max_len = run.len;
            self.longest_pos = run.pos;
        }
        self.last_pos = run.pos;
    }

    fn finish(self) -> LineGroup {
        // round(sum / count) with halves rounded up, in integers
        let avg = (2 * self.sum_pos + self.count) / (2 * self.count);
        LineGroup {
            avg_pos: avg as i64,
            pos: self.longest_pos,
            max_len: self.max_len,
            members: self.count as usize,
            first_pos: self.first_pos,
            last_pos: self.last_pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pos: u32, len: u32) -> Run {
        Run {
            pos,
            start: 0,
            end: len - 1,
            len,
        }
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_lines(&[], 8).is_empty());
    }

    #[test]
    fn single_run_is_singleton_group() {
        let groups = group_lines(&[run(42, 30)], 8);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].avg_pos, 42);
        assert_eq!(groups[0].max_len, 30);
        assert_eq!(groups[0].members, 1);
    }

    #[test]
    fn splits_on_gap_larger_than_tolerance() {
        let runs = [run(20, 20), run(0, 15), run(3, 40), run(40, 12)];
        let groups = group_lines(&runs, 8);
        assert_eq!(groups.len(), 3);
        // 0 and 3 -> mean 1.5 rounds up to 2
        assert_eq!(groups[0].avg_pos, 2);
        assert_eq!(groups[0].max_len, 40);
        assert_eq!(groups[0].pos, 3);
        assert_eq!(groups[1].avg_pos, 20);
        assert_eq!(groups[2].avg_pos, 40);
    }

    #[test]
    fn gap_equal_to_tolerance_joins() {
        let groups = group_lines(&[run(0, 20), run(8, 20)], 8);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].avg_pos, 4);
    }

    #[test]
    fn chained_runs_exceed_tolerance_span() {
        let runs: Vec<Run> = (0..5).map(|i| run(i * 6, 20)).collect();
        let groups = group_lines(&runs, 8);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].span(), 24);
        assert_eq!(groups[0].avg_pos, 12);
    }

    #[test]
    fn longest_member_keeps_first_position_on_ties() {
        let groups = group_lines(&[run(5, 30), run(7, 30), run(6, 10)], 8);
        assert_eq!(groups[0].pos, 5);
        assert_eq!(groups[0].avg_pos, 6);
    }
}
