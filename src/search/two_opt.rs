use crate::metrics::PassRecord;
use crate::problem::Problem;
use crate::search::progress::SearchProgress;
use crate::tour::Tour;
use crate::types::Distance;

/// Shortens `tour` in place with first-improvement 2-opt and returns its new length.
///
/// A pass scans the pairs `(i, k)`, `i < k`, in lexicographic order, where the
/// candidate reverses positions `i..=k`. The first strictly shorter candidate
/// is adopted and the scan starts over in a new pass. The search stops after a
/// pass that adopts nothing, so the result is a 2-opt local optimum and
/// running it again leaves the tour unchanged.
///
/// When `pass_records` is given, one record is pushed per pass.
pub fn two_opt(
    tour: &mut Tour,
    problem: &Problem,
    mut pass_records: Option<&mut Vec<PassRecord>>,
) -> Distance {
    let initial_length = tour.length(problem);
    let mut progress = SearchProgress::new(initial_length);

    loop {
        progress.start_pass();

        let improvement = first_improvement(tour, problem, &mut progress);
        if let Some(gain) = improvement {
            progress.record_move(progress.incumbent_length - gain);
        }

        if let Some(ref mut records) = pass_records {
            records.push(progress.finish_pass(improvement.is_some()));
        }

        if improvement.is_none() {
            break;
        }
    }

    debug_assert_eq!(progress.incumbent_length, tour.length(problem));

    log::debug!(
        "two_opt: passes={} moves={} evaluations={} length {} -> {}",
        progress.pass,
        progress.moves,
        progress.evaluations,
        initial_length,
        progress.incumbent_length
    );

    progress.incumbent_length
}

/// Applies the first improving reversal, returning how much shorter the tour got.
///
/// The candidate's length is the current length with the edges
/// `(prev, tour[i])` and `(tour[k], next)` swapped for `(prev, tour[k])` and
/// `(tour[i], next)`. Reversing the whole tour gives the same cycle and is
/// skipped.
fn first_improvement(
    tour: &mut Tour,
    problem: &Problem,
    progress: &mut SearchProgress,
) -> Option<Distance> {
    let n = tour.len();

    for i in 0..n.saturating_sub(1) {
        let prev = tour.get((i + n - 1) % n);
        let first = tour.get(i);

        for k in (i + 1)..n {
            if i == 0 && k == n - 1 {
                continue;
            }
            progress.record_evaluation();

            let last = tour.get(k);
            let next = tour.get((k + 1) % n);

            let removed = problem.distance(prev, first) + problem.distance(last, next);
            let added = problem.distance(prev, last) + problem.distance(first, next);

            if added < removed {
                log::trace!("two_opt: reverse {i}..={k} gain={}", removed - added);
                tour.reverse(i, k);
                return Some(removed - added);
            }
        }
    }

    None
}
