// Cross-cutting prompt fragments. Feature prompts live next to their feature.

/// System prompt enforcing a bare JSON reply.
pub const JSON_ONLY_SYSTEM: &str = "You are a marketing content specialist. \
    Always return valid JSON only, with no additional text or markdown formatting.";
