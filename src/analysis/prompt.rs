//! Prompt construction for the classification request.

use crate::incident::Incident;
use serde::Serialize;

/// The subset of incident fields sent to the service.
#[derive(Serialize)]
struct IncidentRequest<'a> {
    id: &'a str,
    actor: &'a str,
    event: &'a str,
    timestamp: String,
}

/// Render the instruction plus the serialized unanalyzed batch.
pub fn build_prompt(incidents: &[Incident]) -> String {
    let payload: Vec<IncidentRequest<'_>> = incidents
        .iter()
        .map(|inc| IncidentRequest {
            id: &inc.id,
            actor: &inc.actor,
            event: &inc.event,
            timestamp: inc.timestamp.to_rfc3339(),
        })
        .collect();

    // The batch always serializes: only strings inside.
    let serialized =
        serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "[]".to_string());

    format!(
        "You are Santa's Head of Security Operations. Analyze these North Pole \
security incidents and respond with ONLY a JSON array (no markdown, no preamble).\n\n\
For each incident, return an object with:\n\
- id: the original incident id, copied verbatim\n\
- severity: \"CRITICAL\", \"HIGH\", \"MEDIUM\", or \"LOW\"\n\
- category: cyber security category (e.g., \"Unauthorized Access\", \"Data Exfiltration\", \
\"Malware\", \"Social Engineering\", \"Insider Threat\")\n\
- summary: a festive 1-sentence summary\n\
- action: recommended action in festive terms\n\
- naughty_score: integer 0-100 (100 = very naughty)\n\n\
Incidents to analyze:\n{serialized}\n\n\
Respond with only the JSON array, one object per incident."
    )
}
