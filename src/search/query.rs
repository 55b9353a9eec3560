//! Typed builder for the product-search query DSL body.

use serde_json::{json, Value};

/// Builder for the boosted multi-clause product query.
///
/// The clause weights and decay scales are tuned for the catalog index and
/// deliberately fixed; callers vary only the query text, filters, category
/// restriction, click prior and output shaping.
#[derive(Debug, Clone)]
pub struct SearchQueryBuilder<'a> {
    user_query: &'a str,
    click_prior: Option<&'a str>,
    filters: Vec<Value>,
    categories: &'a [String],
    sort: &'a str,
    sort_dir: &'a str,
    size: usize,
    source: Option<&'a [&'a str]>,
}

impl<'a> SearchQueryBuilder<'a> {
    pub fn new(user_query: &'a str) -> Self {
        Self {
            user_query,
            click_prior: None,
            filters: Vec::new(),
            categories: &[],
            sort: "_score",
            sort_dir: "desc",
            size: 10,
            source: None,
        }
    }

    /// Click-prior weighting expression; empty strings add no clause.
    pub fn click_prior(mut self, prior: &'a str) -> Self {
        self.click_prior = Some(prior);
        self
    }

    /// Extra filter clause applied alongside any category restriction.
    pub fn filter(mut self, clause: Value) -> Self {
        self.filters.push(clause);
        self
    }

    /// Restrict hits to these category path ids; empty means no restriction.
    pub fn categories(mut self, categories: &'a [String]) -> Self {
        self.categories = categories;
        self
    }

    pub fn sort(mut self, field: &'a str, direction: &'a str) -> Self {
        self.sort = field;
        self.sort_dir = direction;
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Project only these source fields; default retrieves full source.
    pub fn source(mut self, fields: &'a [&'a str]) -> Self {
        self.source = Some(fields);
        self
    }

    /// Render the complete request body.
    pub fn build(&self) -> Value {
        let mut filters = self.filters.clone();
        if !self.categories.is_empty() {
            filters.push(json!({
                "terms": {
                    "categoryPathIds.keyword": self.categories
                }
            }));
        }

        let mut should = vec![
            json!({
                "match": {
                    "name": {
                        "query": self.user_query,
                        "fuzziness": "1",
                        // short words are often acronyms or not misspelled, so don't edit
                        "prefix_length": 2,
                        "boost": 0.01
                    }
                }
            }),
            // near exact phrase match
            json!({
                "match_phrase": {
                    "name.hyphens": {
                        "query": self.user_query,
                        "slop": 1,
                        "boost": 50
                    }
                }
            }),
            json!({
                "multi_match": {
                    "query": self.user_query,
                    "type": "phrase",
                    "slop": "6",
                    "minimum_should_match": "2<75%",
                    "fields": ["name^10", "name.hyphens^10", "shortDescription^5",
                               "longDescription^5", "department^0.5", "sku", "manufacturer",
                               "features", "categoryPath"]
                }
            }),
            // lots of SKUs in the query logs, boost by them; split on whitespace
            json!({
                "terms": {
                    "sku": self.user_query.split_whitespace().collect::<Vec<_>>(),
                    "boost": 50.0
                }
            }),
            // products often carry hyphens or odd casing like iPad
            json!({
                "match": {
                    "name.hyphens": {
                        "query": self.user_query,
                        "operator": "OR",
                        "minimum_should_match": "2<75%"
                    }
                }
            }),
        ];

        if let Some(prior) = self.click_prior {
            if !prior.is_empty() {
                should.push(json!({
                    "query_string": {
                        "query": prior,
                        "fields": ["_id"]
                    }
                }));
            }
        }

        let query = if self.user_query == "*" || self.user_query == "#" {
            json!({ "match_all": {} })
        } else {
            json!({
                "function_score": {
                    "query": {
                        "bool": {
                            "must": [],
                            "should": should,
                            "minimum_should_match": 1,
                            "filter": filters
                        }
                    },
                    // how _score and functions are combined
                    "boost_mode": "multiply",
                    // how functions are combined
                    "score_mode": "sum",
                    "functions": sales_rank_functions()
                }
            })
        };

        let mut body = json!({
            "size": self.size,
            "sort": [
                { (self.sort): { "order": self.sort_dir } }
            ],
            "query": query
        });
        if let Some(fields) = self.source {
            body["_source"] = json!(fields);
        }
        body
    }
}

/// Sales-rank decay scoring plus a constant floor so rank-less products
/// still score.
fn sales_rank_functions() -> Value {
    json!([
        {
            "filter": { "exists": { "field": "salesRankShortTerm" } },
            "gauss": {
                "salesRankShortTerm": { "origin": "1.0", "scale": "100" }
            }
        },
        {
            "filter": { "exists": { "field": "salesRankMediumTerm" } },
            "gauss": {
                "salesRankMediumTerm": { "origin": "1.0", "scale": "1000" }
            }
        },
        {
            "filter": { "exists": { "field": "salesRankLongTerm" } },
            "gauss": {
                "salesRankLongTerm": { "origin": "1.0", "scale": "1000" }
            }
        },
        {
            "script_score": { "script": "0.0001" }
        }
    ])
}

/// Derive the `_count` request body from a search body.
pub fn count_body(search_body: &Value) -> Value {
    json!({ "query": search_body["query"].clone() })
}
