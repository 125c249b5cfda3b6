// Model name resolution (OpenAI-style request names → upstream names)

/// Prefixes of first-party Generative Language model families.
const KNOWN_PREFIXES: &[&str] = &["gemini-", "gemma-", "learnlm-"];

/// Suffix stripped from the effective model name.
const SEARCH_SUFFIX: &str = ":search";

/// Suffix left on the effective model name. Matching it still enables
/// search grounding; the asymmetry is inherited behavior.
const SEARCH_PREVIEW_SUFFIX: &str = "-search-preview";

/// Outcome of chat model resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChatModel {
    /// Model name used in the upstream URL path.
    pub upstream: String,

    /// Whether the request gets a `googleSearch` tool entry.
    pub search_grounding: bool,
}

/// Resolve the model for a chat completion request.
///
/// `models/`-prefixed names are stripped; recognized first-party names pass
/// through; anything else falls back to the configured default. The two
/// search-suffix checks run independently against the original request
/// string, and the search tool is attached once even if both match.
pub fn resolve_chat_model(requested: Option<&str>, default_model: &str) -> ResolvedChatModel {
    let requested = requested.unwrap_or_default();

    let search_grounding =
        requested.ends_with(SEARCH_SUFFIX) || requested.ends_with(SEARCH_PREVIEW_SUFFIX);

    let name = requested.strip_suffix(SEARCH_SUFFIX).unwrap_or(requested);

    let upstream = if let Some(rest) = name.strip_prefix("models/") {
        rest.to_string()
    } else if is_known_model(name) {
        name.to_string()
    } else {
        default_model.to_string()
    };

    ResolvedChatModel {
        upstream,
        search_grounding,
    }
}

/// Resolve the model for an embeddings request into a `models/...` path.
///
/// Already-prefixed names are used verbatim; recognized first-party names
/// get the prefix prepended; anything else is replaced by the default
/// embedding model first.
pub fn resolve_embedding_model(requested: &str, default_model: &str) -> String {
    if requested.starts_with("models/") {
        requested.to_string()
    } else if is_known_model(requested) {
        format!("models/{requested}")
    } else {
        format!("models/{default_model}")
    }
}

fn is_known_model(name: &str) -> bool {
    KNOWN_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}
