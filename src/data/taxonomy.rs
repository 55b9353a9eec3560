//! Product category taxonomy parsed from the catalog XML export.

use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use quick_xml::de::from_str;
use serde::Deserialize;
use tracing::info;

/// Root of the standard catalog taxonomy; it has no parent.
pub const DEFAULT_ROOT_CATEGORY: &str = "cat00000";

/// Category forest keyed by category id, each node holding its parent id.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    parents: IndexMap<String, String>,
}

impl Taxonomy {
    /// Parse the taxonomy from a categories XML file.
    ///
    /// Each `<category>` element carries a `<path>` from the root down to the
    /// category itself; the last path entry is the category id and the
    /// second-to-last its parent. The root category is skipped.
    pub fn from_xml_file<P: AsRef<Path>>(path: P, root_id: &str) -> Result<Self> {
        let xml = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("reading categories file {:?}", path.as_ref()))?;
        let file: CategoriesFile = from_str(&xml).context("parsing categories XML")?;

        let mut parents = IndexMap::new();
        for entry in &file.categories {
            let path_ids: Vec<&str> = entry.path.entries.iter().map(|c| c.id.as_str()).collect();
            let Some((&leaf_id, ancestors)) = path_ids.split_last() else {
                continue;
            };
            if leaf_id == root_id {
                continue;
            }
            let Some(&parent_id) = ancestors.last() else {
                continue;
            };
            parents.insert(leaf_id.to_string(), parent_id.to_string());
        }
        info!(categories = parents.len(), "parsed category taxonomy");
        Ok(Self { parents })
    }

    /// Build a taxonomy directly from (category, parent) edges.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let parents = edges
            .into_iter()
            .map(|(c, p)| (c.into(), p.into()))
            .collect();
        Self { parents }
    }

    /// Parent id of a category, if the category is in the taxonomy.
    pub fn parent(&self, category: &str) -> Option<&str> {
        self.parents.get(category).map(String::as_str)
    }

    /// Whether the category is a non-root member of the taxonomy.
    pub fn contains(&self, category: &str) -> bool {
        self.parents.contains_key(category)
    }

    /// The category → parent map in insertion order.
    pub fn parents(&self) -> &IndexMap<String, String> {
        &self.parents
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct CategoriesFile {
    #[serde(rename = "category", default)]
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    path: CategoryPath,
}

#[derive(Debug, Deserialize, Default)]
struct CategoryPath {
    #[serde(rename = "category", default)]
    entries: Vec<PathEntry>,
}

#[derive(Debug, Deserialize)]
struct PathEntry {
    id: String,
}
