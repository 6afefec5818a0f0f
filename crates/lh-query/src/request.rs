//! Search request model.

/// A content-discovery request: free text plus optional structured filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Raw query text.
    pub s: String,
    /// Comma-separated media types (`audio`, `video`, `text`, `application`, `image`, `cad`).
    pub media_type: Option<String>,
    /// Comma-separated MIME content types.
    pub content_type: Option<String>,
    /// Claim type (`channel` or `file`).
    pub claim_type: Option<String>,
    /// Claim id of the channel that must own the results.
    pub channel_id: Option<String>,
    /// Channel name pattern the results must belong to.
    pub channel: Option<String>,
    /// Claim id to match.
    pub claim_id: Option<String>,
    /// Required value of the mature-content flag.
    pub nsfw: Option<bool>,
}

impl SearchRequest {
    /// Creates a request with only query text.
    pub fn new(s: impl Into<String>) -> Self {
        Self {
            s: s.into(),
            ..Self::default()
        }
    }

    /// Sets the media type list.
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Sets the content type list.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the claim type.
    pub fn with_claim_type(mut self, claim_type: impl Into<String>) -> Self {
        self.claim_type = Some(claim_type.into());
        self
    }

    /// Sets the owning channel's claim id.
    pub fn with_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// Sets the channel name.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Sets the claim id.
    pub fn with_claim_id(mut self, claim_id: impl Into<String>) -> Self {
        self.claim_id = Some(claim_id.into());
        self
    }

    /// Sets the NSFW flag.
    pub fn with_nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = Some(nsfw);
        self
    }
}
