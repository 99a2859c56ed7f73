//! Shared record types for the memory subsystem.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::embeddings::EmbeddingVector;
use crate::{MemoryError, MemoryResult};

/// Memory tier a record was captured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryTier {
    /// Recent, working memory.
    ShortTerm,
    /// Consolidated memory.
    LongTerm,
}

impl MemoryTier {
    /// Tiers in the order their embeddings are concatenated when scoring.
    pub const ALL: [Self; 2] = [Self::ShortTerm, Self::LongTerm];

    /// Returns a stable label for logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShortTerm => "short_term",
            Self::LongTerm => "long_term",
        }
    }
}

impl Display for MemoryTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A document remembered by an agent together with its embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EmbeddingRecordRepr")]
pub struct EmbeddingRecord {
    id: Uuid,
    author: String,
    document: String,
    embedding: EmbeddingVector,
}

impl EmbeddingRecord {
    /// Creates a builder for a record authored by `author`.
    #[must_use]
    pub fn builder(
        author: impl Into<String>,
        embedding: EmbeddingVector,
    ) -> EmbeddingRecordBuilder {
        EmbeddingRecordBuilder {
            id: Uuid::new_v4(),
            author: author.into(),
            document: String::new(),
            embedding,
        }
    }

    /// Returns the unique identifier for this record.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the author key, always lowercase.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the document text.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Returns the embedding of the document.
    #[must_use]
    pub fn embedding(&self) -> &EmbeddingVector {
        &self.embedding
    }
}

/// Builder type used to assemble [`EmbeddingRecord`] instances safely.
#[derive(Debug)]
pub struct EmbeddingRecordBuilder {
    id: Uuid,
    author: String,
    document: String,
    embedding: EmbeddingVector,
}

impl EmbeddingRecordBuilder {
    /// Overrides the record identifier.
    #[must_use]
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the document text.
    #[must_use]
    pub fn document(mut self, document: impl Into<String>) -> Self {
        self.document = document.into();
        self
    }

    /// Finalises the builder and produces the record.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::InvalidRecord`] when the author is empty.
    pub fn build(self) -> MemoryResult<EmbeddingRecord> {
        let author = self.author.trim();
        if author.is_empty() {
            return Err(MemoryError::InvalidRecord("record author must not be empty"));
        }
        Ok(EmbeddingRecord {
            id: self.id,
            author: author.to_lowercase(),
            document: self.document,
            embedding: self.embedding,
        })
    }
}

#[derive(Deserialize)]
struct EmbeddingRecordRepr {
    #[serde(default)]
    id: Option<Uuid>,
    author: String,
    #[serde(default)]
    document: String,
    embedding: EmbeddingVector,
}

impl TryFrom<EmbeddingRecordRepr> for EmbeddingRecord {
    type Error = MemoryError;

    fn try_from(repr: EmbeddingRecordRepr) -> MemoryResult<Self> {
        let mut builder = Self::builder(repr.author, repr.embedding).document(repr.document);
        if let Some(id) = repr.id {
            builder = builder.id(id);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedding() -> EmbeddingVector {
        EmbeddingVector::new(vec![0.5, 0.5]).unwrap()
    }

    #[test]
    fn builder_lowercases_author() {
        let record = EmbeddingRecord::builder("  Giulia ", embedding())
            .document("went hiking")
            .build()
            .unwrap();

        assert_eq!(record.author(), "giulia");
        assert_eq!(record.document(), "went hiking");
    }

    #[test]
    fn builder_rejects_blank_author() {
        let err = EmbeddingRecord::builder(" ", embedding())
            .build()
            .expect_err("blank author");
        assert!(matches!(err, MemoryError::InvalidRecord(_)));
    }

    #[test]
    fn deserializes_without_id() {
        let record: EmbeddingRecord =
            serde_json::from_str(r#"{"author":"Paolo","document":"pasta","embedding":[1.0,0.0]}"#)
                .unwrap();
        assert_eq!(record.author(), "paolo");
        assert_eq!(record.embedding().len(), 2);
    }

    #[test]
    fn tiers_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&MemoryTier::ShortTerm).unwrap(),
            r#""short_term""#
        );
        assert_eq!(MemoryTier::LongTerm.to_string(), "long_term");
    }
}
