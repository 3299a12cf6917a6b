//! Partitioning of commit history into release buckets

use std::collections::HashMap;

use changelist_core::config::TagCommitPolicy;
use changelist_git::{CommitInfo, TagInfo};
use tracing::debug;

use crate::types::VersionBucket;

/// Order tags newest first by the log position of the commit they point at.
///
/// `commits` must be newest first. Tags whose commit is not in the log are
/// dropped. Tags sharing a commit are ordered by name, descending.
pub fn order_tags(commits: &[CommitInfo], tags: &[TagInfo]) -> Vec<TagInfo> {
    let positions: HashMap<&str, usize> = commits
        .iter()
        .enumerate()
        .map(|(index, commit)| (commit.hash.as_str(), index))
        .collect();

    let mut ordered: Vec<(usize, &TagInfo)> = tags
        .iter()
        .filter_map(|tag| match positions.get(tag.commit_hash.as_str()) {
            Some(&index) => Some((index, tag)),
            None => {
                debug!(tag = %tag.name, "tag not reachable from HEAD, ignoring");
                None
            }
        })
        .collect();

    ordered.sort_by(|(a_index, a), (b_index, b)| {
        a_index.cmp(b_index).then_with(|| b.name.cmp(&a.name))
    });

    ordered.into_iter().map(|(_, tag)| tag.clone()).collect()
}

/// Partition newest-first `commits` into one bucket per tag plus a leading
/// bucket labelled `unreleased_label`.
///
/// `tags` must already be ordered newest first (see [`order_tags`]). Each tag
/// closes the bucket that precedes it: the bucket takes the remaining commits
/// up to, but not including, the tag's commit. Under
/// [`TagCommitPolicy::Marker`] the tag's commit is then dropped; under
/// [`TagCommitPolicy::Inclusive`] it opens the tag's own bucket.
pub fn partition(
    commits: &[CommitInfo],
    tags: &[TagInfo],
    unreleased_label: &str,
    policy: TagCommitPolicy,
) -> Vec<VersionBucket> {
    let mut buckets = Vec::with_capacity(tags.len() + 1);
    let mut remaining = commits;
    let mut label = unreleased_label.to_string();

    for tag in tags {
        let boundary = remaining.iter().position(|c| c.hash == tag.commit_hash);

        // An already-consumed boundary (tag sharing a commit) yields an empty bucket
        let end = boundary.unwrap_or(0);
        let consumed = match (policy, boundary) {
            (TagCommitPolicy::Marker, Some(index)) => index + 1,
            _ => end,
        };

        buckets.push(VersionBucket::new(label, remaining[..end].to_vec()));
        label = tag.name.clone();
        remaining = &remaining[consumed..];
    }

    buckets.push(VersionBucket::new(label, remaining.to_vec()));

    debug!(
        bucket_count = buckets.len(),
        policy = ?policy,
        "partitioned commits into buckets"
    );
    buckets
}
