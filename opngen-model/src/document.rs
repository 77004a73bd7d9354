use crate::{Element, Error, Locator, Result, parse_document};

/// A parsed model document together with where it came from.
#[derive(Debug, Clone)]
pub struct ModelDocument {
    locator: Locator,
    root: Element,
}

impl ModelDocument {
    /// Fetch and parse the document behind `locator`.
    pub fn load(locator: Locator) -> Result<Self> {
        let text = locator.fetch()?;
        let root = parse_document(&text, &locator.to_string())?;
        tracing::debug!(locator = %locator, root = root.name(), "parsed model");
        Ok(Self { locator, root })
    }

    /// Parse an in-memory document. `locator` is kept for error messages.
    pub fn parse(text: &str, locator: Locator) -> Result<Self> {
        let root = parse_document(text, &locator.to_string())?;
        Ok(Self { locator, root })
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// First element named `tag` anywhere in the document.
    pub fn resolve(&self, tag: &str) -> Result<&Element> {
        self.root.find(tag).ok_or_else(|| Error::NotFound {
            tag: tag.to_string(),
            locator: self.locator.to_string(),
        })
    }
}

/// Fetch the model behind `locator` and return the element named `tag`.
///
/// The element's direct children are the model fields.
pub fn resolve(locator: &str, tag: &str) -> Result<Element> {
    let document = ModelDocument::load(Locator::parse(locator)?)?;
    let element = document.resolve(tag)?;
    tracing::info!(
        locator = %document.locator(),
        tag,
        fields = element.children().len(),
        "resolved model tag"
    );
    Ok(element.clone())
}
