//! Pairwise sense similarity aggregator.
//!
//! For one word pair, scores every (sense of first, sense of second)
//! combination with every selected metric and keeps the best value per
//! metric. Candidates are visited in resource order, first word outer.

use serde::Serialize;
use tracing::trace;
use wordsim_core::constants::DEFAULT_SCORE_PRECISION;
use wordsim_core::types::precision::round_to;
use wordsim_core::{ILexicalResource, MetricKind, MetricScores};

use super::gate::ApplicabilityGate;

/// Which side of a pair resolved to no senses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingWord {
    First,
    Second,
    Both,
}

/// Result of aggregating one word pair.
#[derive(Debug, Clone, PartialEq)]
pub enum PairOutcome {
    /// At least one word has no senses; every metric is undefined.
    Uncovered(MissingWord),
    Scored(MetricScores),
}

impl PairOutcome {
    /// Per-metric scores; all undefined for an uncovered pair.
    pub fn scores(&self) -> MetricScores {
        match self {
            Self::Uncovered(_) => MetricScores::undefined(),
            Self::Scored(scores) => *scores,
        }
    }
}

pub struct PairAggregator<'a, R: ILexicalResource + ?Sized> {
    resource: &'a R,
    ic: Option<&'a R::InformationContent>,
    gate: ApplicabilityGate,
    metrics: Vec<MetricKind>,
    score_precision: u32,
}

impl<'a, R: ILexicalResource + ?Sized> PairAggregator<'a, R> {
    /// All six metrics at the default score precision.
    pub fn new(resource: &'a R, ic: Option<&'a R::InformationContent>) -> Self {
        Self {
            resource,
            ic,
            gate: ApplicabilityGate,
            metrics: MetricKind::ALL.to_vec(),
            score_precision: DEFAULT_SCORE_PRECISION,
        }
    }

    pub fn with_metrics(mut self, metrics: Vec<MetricKind>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_score_precision(mut self, digits: u32) -> Self {
        self.score_precision = digits;
        self
    }

    pub fn metrics(&self) -> &[MetricKind] {
        &self.metrics
    }

    /// Best rounded score per metric over the full candidate cross product.
    ///
    /// Only a strictly greater value replaces the running maximum, so the
    /// first maximum encountered wins ties.
    pub fn evaluate(&self, first: &str, second: &str) -> PairOutcome {
        let left = self.resource.candidates(first);
        let right = self.resource.candidates(second);
        match (left.is_empty(), right.is_empty()) {
            (true, true) => return PairOutcome::Uncovered(MissingWord::Both),
            (true, false) => return PairOutcome::Uncovered(MissingWord::First),
            (false, true) => return PairOutcome::Uncovered(MissingWord::Second),
            (false, false) => {}
        }

        let mut best = MetricScores::undefined();
        for a in &left {
            for b in &right {
                for &kind in &self.metrics {
                    if let Err(reason) = self.gate.check(kind, a, b, self.ic) {
                        trace!(metric = %kind, %reason, "combination skipped");
                        continue;
                    }
                    let Some(raw) = self.resource.similarity(kind, a, b, self.ic) else {
                        continue;
                    };
                    let value = round_to(raw, self.score_precision);
                    if value.is_nan() {
                        continue;
                    }
                    if best.get(kind).map_or(true, |current| value > current) {
                        best.set(kind, Some(value));
                    }
                }
            }
        }
        PairOutcome::Scored(best)
    }
}

#[cfg(test)]
mod tests {
    use wordsim_core::{
        IInformationContent, PartOfSpeech, SenseCandidate, SenseCandidates, SenseId,
    };

    use super::*;

    struct AllCovered;

    impl IInformationContent for AllCovered {
        fn covers(&self, _pos: PartOfSpeech) -> bool {
            true
        }
    }

    /// Words map to fixed sense lists; similarity comes from a lookup table
    /// keyed by sense id pair, identical for every metric.
    struct Table {
        words: Vec<(&'static str, Vec<(u32, PartOfSpeech)>)>,
        scores: Vec<((u32, u32), f64)>,
    }

    impl ILexicalResource for Table {
        type InformationContent = AllCovered;

        fn candidates(&self, word: &str) -> SenseCandidates {
            self.words
                .iter()
                .filter(|(w, _)| *w == word)
                .flat_map(|(_, senses)| senses.iter())
                .map(|&(id, pos)| SenseCandidate::new(SenseId::new(id), pos))
                .collect()
        }

        fn similarity(
            &self,
            _kind: MetricKind,
            a: &SenseCandidate,
            b: &SenseCandidate,
            _ic: Option<&AllCovered>,
        ) -> Option<f64> {
            let key = (a.id.index() as u32, b.id.index() as u32);
            self.scores.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
        }
    }

    fn table() -> Table {
        use PartOfSpeech::*;
        Table {
            words: vec![
                ("bank", vec![(1, Noun), (2, Verb)]),
                ("river", vec![(3, Noun)]),
                ("tall", vec![(4, Adjective)]),
                ("high", vec![(5, AdjectiveSatellite)]),
                ("pool", vec![(6, Noun), (7, Noun)]),
                ("pond", vec![(8, Noun)]),
            ],
            scores: vec![
                ((1, 3), 0.2549),
                ((2, 3), 0.7),
                ((4, 5), -0.4),
                ((6, 3), 0.625),
                ((7, 3), 8.0 / 13.0),
                ((6, 8), 0.125),
            ],
        }
    }

    #[test]
    fn unknown_word_short_circuits() {
        let t = table();
        let agg = PairAggregator::new(&t, Some(&AllCovered));
        assert_eq!(agg.evaluate("bank", "zzz"), PairOutcome::Uncovered(MissingWord::Second));
        assert_eq!(agg.evaluate("zzz", "qqq"), PairOutcome::Uncovered(MissingWord::Both));
        assert_eq!(agg.evaluate("zzz", "bank").scores().defined_count(), 0);
    }

    #[test]
    fn keeps_maximum_and_gates_by_pos() {
        let t = table();
        let agg = PairAggregator::new(&t, Some(&AllCovered));
        let scores = agg.evaluate("bank", "river").scores();
        // the verb sense wins where POS may differ
        assert_eq!(scores.get(MetricKind::Path), Some(0.7));
        assert_eq!(scores.get(MetricKind::WuPalmer), Some(0.7));
        // only noun/noun qualifies; rounded at comparison
        assert_eq!(scores.get(MetricKind::LeacockChodorow), Some(0.25));
        assert_eq!(scores.get(MetricKind::Lin), Some(0.25));
    }

    #[test]
    fn negative_scores_are_representable() {
        let t = table();
        let agg = PairAggregator::new(&t, Some(&AllCovered));
        let scores = agg.evaluate("tall", "high").scores();
        assert_eq!(scores.get(MetricKind::Path), Some(-0.4));
        assert_eq!(scores.get(MetricKind::LeacockChodorow), None);
        assert_eq!(scores.get(MetricKind::Resnik), None);
    }

    #[test]
    fn missing_ic_store_disables_ic_metrics() {
        let t = table();
        let agg = PairAggregator::new(&t, None);
        let scores = agg.evaluate("bank", "river").scores();
        assert_eq!(scores.get(MetricKind::Path), Some(0.7));
        assert_eq!(scores.get(MetricKind::Resnik), None);
        assert_eq!(scores.get(MetricKind::JiangConrath), None);
    }

    #[test]
    fn only_selected_metrics_are_scored() {
        let t = table();
        let agg = PairAggregator::new(&t, Some(&AllCovered))
            .with_metrics(vec![MetricKind::Lin])
            .with_score_precision(4);
        let scores = agg.evaluate("bank", "river").scores();
        assert_eq!(scores.get(MetricKind::Lin), Some(0.2549));
        assert_eq!(scores.defined_count(), 1);
    }

    #[test]
    fn exact_halves_round_to_even_before_comparison() {
        let t = table();
        let agg = PairAggregator::new(&t, Some(&AllCovered)).with_metrics(vec![MetricKind::Path]);
        // 0.625 and 8/13 both land on 0.62
        assert_eq!(agg.evaluate("pool", "river").scores().get(MetricKind::Path), Some(0.62));
        assert_eq!(agg.evaluate("pool", "pond").scores().get(MetricKind::Path), Some(0.12));
    }
}
