use crate::model::{
    AnalysisSummary, ColumnPairScore, NameCluster, Omission, Partition,
};

/// Roll the run's products up into headline counts.
pub fn compute_summary(
    total_rows: usize,
    partition: &Partition,
    clusters: &[NameCluster],
    similarity: &[ColumnPairScore],
    omissions: &[Omission],
) -> AnalysisSummary {
    AnalysisSummary {
        total_rows,
        unique_rows: partition.unique.len(),
        duplicate_rows: partition.duplicate.len(),
        duplicate_groups: partition.groups.len(),
        clustered_anchors: clusters.len(),
        defined_pairs: similarity.len(),
        omitted_pairs: omissions
            .iter()
            .filter(|o| o.product == "similarity")
            .count(),
    }
}
