//! Synthetic incident generation from fixed actor and event vocabularies.

use crate::incident::Incident;
use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

/// Named entities that show up in incident records.
pub const ACTORS: &[&str] = &[
    "Elf_Buddy",
    "Elf_Jingle",
    "Elf_Sparkle",
    "Rudolph",
    "Dasher",
    "Prancer",
    "Mrs_Claus",
    "Elf_Tinsel",
    "Blitzen",
    "Comet",
    "Elf_Cookie",
];

/// Event catalog: a mix of adverse and positive entries. Severity is not
/// implied here; classification is entirely the analyzer's call.
pub const EVENTS: &[&str] = &[
    "Accessed toy production database after hours",
    "Multiple failed login attempts to Nice List portal",
    "Downloaded entire Naughty List to external sleigh drive",
    "Attempted to modify gift delivery routes",
    "Suspicious cookie consumption detected in server room",
    "Unauthorized access to reindeer flight plans",
    "Candy cane smuggling detected at North Pole perimeter",
    "Malicious gingerbread executable found in mailroom",
    "Elf attempted to escalate privileges to \"Head Elf\"",
    "Unusual network traffic to Grinch Mountain IP",
    "Sleigh GPS coordinates leaked on dark web",
    "Phishing email: \"Click here for extra milk and cookies\"",
    "Ransomware threat: Pay 1000 candy canes or no presents",
    "Workshop camera footage mysteriously deleted",
    "Toy prototype stolen from R&D department",
    "Elf tried to install unauthorized Christmas music streaming app",
    "Reindeer stable door left unlocked overnight",
    "Present wrapping paper inventory discrepancy detected",
    "SQL injection attempt on gift wishlist database",
    "Distributed Denial of Sleigh (DDoS) attack detected",
    "Reported security vulnerability in gift tracking system",
    "Completed mandatory cybersecurity training early",
    "Helped another elf reset forgotten password securely",
    "Identified and blocked phishing email targeting workshop",
    "Properly logged out of all systems before sleigh ride",
    "Updated antivirus on toy testing equipment",
    "Organized workshop security awareness meeting",
    "Implemented two-factor authentication on personal account",
    "Safely disposed of sensitive Nice List documents",
    "Backed up critical toy design files to secure location",
    "Reported suspicious activity near server room",
    "Volunteered for after-hours security patrol",
    "Created strong passwords for all workshop accounts",
    "Patched security vulnerabilities in gift wrapping software",
    "Mentored junior elf on security best practices",
    "Encrypted sensitive communications with Santa",
    "Conducted security audit of reindeer stable access controls",
    "Properly segregated production and test environments",
    "Implemented logging for gift delivery API",
    "Documented incident response procedures for workshop",
];

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Produce a batch of 3-5 unanalyzed incidents. Actor and event are drawn
/// uniformly; timestamps are uniform over the preceding 24 hours.
pub fn generate_batch<R: Rng + ?Sized>(rng: &mut R) -> Vec<Incident> {
    let now = Utc::now();
    let count = rng.gen_range(3..=5);

    (0..count)
        .map(|_| Incident {
            id: format!("INC-{}", Uuid::new_v4()),
            actor: ACTORS.choose(rng).copied().unwrap_or("Elf_Buddy").to_string(),
            event: EVENTS.choose(rng).copied().unwrap_or(EVENTS[0]).to_string(),
            timestamp: now - Duration::seconds(rng.gen_range(0..SECONDS_PER_DAY)),
            analysis: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn batch_size_is_three_to_five() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let batch = generate_batch(&mut rng);
            assert!((3..=5).contains(&batch.len()));
        }
    }

    #[test]
    fn batch_entries_are_unanalyzed_with_known_vocabulary() {
        let mut rng = StdRng::seed_from_u64(42);
        let batch = generate_batch(&mut rng);
        for inc in &batch {
            assert!(inc.analysis.is_none());
            assert!(ACTORS.contains(&inc.actor.as_str()));
            assert!(EVENTS.contains(&inc.event.as_str()));
        }
    }

    #[test]
    fn timestamps_fall_within_preceding_day() {
        let mut rng = StdRng::seed_from_u64(3);
        let before = Utc::now();
        let batch = generate_batch(&mut rng);
        let after = Utc::now();
        for inc in &batch {
            assert!(inc.timestamp <= after);
            assert!(inc.timestamp >= before - chrono::Duration::seconds(SECONDS_PER_DAY));
        }
    }

    #[test]
    fn ids_are_unique_across_batches() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = HashSet::new();
        for _ in 0..50 {
            for inc in generate_batch(&mut rng) {
                assert!(seen.insert(inc.id.clone()), "duplicate id {}", inc.id);
            }
        }
    }
}
