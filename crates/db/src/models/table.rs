//! Table names confirmed by live introspection.

/// A table that the database reported as present in the configured schema
/// during the current request.
///
/// Only [`TableRepo::resolve`](crate::repositories::TableRepo::resolve) can
/// build one, so every query that interpolates a table identifier has been
/// preceded by a fresh lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveTable {
    schema: String,
    name: String,
}

impl LiveTable {
    pub(crate) fn new(schema: &str, name: &str) -> Self {
        Self {
            schema: schema.to_string(),
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// `"schema"."table"`, ready to be placed in SQL text.
    pub(crate) fn qualified_ident(&self) -> String {
        format!("{}.{}", quote_ident(&self.schema), quote_ident(&self.name))
    }
}

/// Double-quote a SQL identifier, doubling any embedded quote.
pub(crate) fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain_ident() {
        assert_eq!(quote_ident("staff"), "\"staff\"");
    }

    #[test]
    fn test_quote_doubles_embedded_quotes() {
        assert_eq!(quote_ident("odd\"name"), "\"odd\"\"name\"");
    }

    #[test]
    fn test_qualified_ident() {
        let table = LiveTable::new("public", "Book Loans");
        assert_eq!(table.qualified_ident(), "\"public\".\"Book Loans\"");
        assert_eq!(table.name(), "Book Loans");
        assert_eq!(table.schema(), "public");
    }
}
