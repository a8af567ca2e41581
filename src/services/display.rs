/// Result cards show at most this many specialty tags.
pub const SPECIALTY_BADGE_LIMIT: usize = 3;

/// Result cards show at most this many service badges.
pub const SERVICE_BADGE_LIMIT: usize = 2;

/// Badge labels for a result card: the first `limit` entries, with a
/// trailing `"+N more"` counting whatever fell past the cutoff.
pub fn badge_labels(items: &[String], limit: usize) -> Vec<String> {
    let mut labels: Vec<String> = items.iter().take(limit).cloned().collect();
    if items.len() > limit {
        labels.push(format!("+{} more", items.len() - limit));
    }
    labels
}
