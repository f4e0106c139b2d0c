//! Prompt templates for the hosted models.

use lexcheck_core::Jurisdiction;

/// Legal domains every analysis must check.
pub const LEGAL_DOMAINS: &[&str] = &[
    "GDPR and data protection (2018)",
    "Labour law and collective agreements",
    "Anti-discrimination law",
    "European fundamental freedoms",
];

fn jurisdiction_context(jurisdiction: Jurisdiction) -> &'static str {
    match jurisdiction {
        Jurisdiction::Eu => "European Union law and EU directives",
        Jurisdiction::Be => "Belgian law and national regulations",
    }
}

fn jurisdiction_adjective(jurisdiction: Jurisdiction) -> &'static str {
    match jurisdiction {
        Jurisdiction::Eu => "European",
        Jurisdiction::Be => "Belgian",
    }
}

/// Full prompt used for the OpenAI chat completion.
pub fn analysis_prompt(proposal: &str, jurisdiction: Jurisdiction, year: i32) -> String {
    let domains: String = LEGAL_DOMAINS
        .iter()
        .map(|domain| format!("- {domain}\n"))
        .collect();

    format!(
        "You are a legal expert specialising in {context}.\n\
         Analyse this policy proposal and detect potential legal contradictions:\n\
         \n\
         PROPOSAL: \"{proposal}\"\n\
         \n\
         CONTEXT: Check compliance with:\n\
         {domains}\
         - Recent regulations ({year})\n\
         \n\
         Respond ONLY with valid JSON using exactly this structure:\n\
         {{\n  \
           \"contradictions\": [\"precise list of detected contradictions\"],\n  \
           \"risks\": [\"identified legal risks with severity\"],\n  \
           \"confidence\": 0.85,\n  \
           \"recommendations\": [\"concrete improvement suggestions\"],\n  \
           \"legalSources\": [\"relevant legal references with articles\"],\n  \
           \"summary\": \"2-3 sentence summary of the overall analysis\"\n\
         }}",
        context = jurisdiction_context(jurisdiction),
    )
}

/// Shorter prompt used for the Anthropic messages API.
pub fn brief_analysis_prompt(proposal: &str, jurisdiction: Jurisdiction) -> String {
    format!(
        "Analyse this policy proposal for legal contradictions under {adjective} law: \
         \"{proposal}\". Respond in JSON with the fields: contradictions, risks, \
         confidence, recommendations, legalSources, summary.",
        adjective = jurisdiction_adjective(jurisdiction),
    )
}
