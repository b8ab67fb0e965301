// imports
use crate::error::{Error, Result};

use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use tracing::info;


/// Sequences of itemsets read from a JSON file, with one label per sequence.
///
/// The file holds either a bare array of sequences:
///
/// ```json
/// [[["home", "search"], ["product"]], [["home"]]]
/// ```
///
/// or an object naming each sequence:
///
/// ```json
/// {"ids": ["u1", "u2"], "sequences": [[["home", "search"], ["product"]], [["home"]]]}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    pub labels: Vec<String>,
    pub sequences: Vec<Vec<Vec<String>>>,
}

impl Corpus {

    pub fn read_file(file_path: &str) -> Result<Corpus> {

        let f = BufReader::new(File::open(file_path)?);
        let json: Value = serde_json::from_reader(f)?;
        let corpus = Corpus::from_json(&json)?;
        info!("loaded {} sequences from {}", corpus.len(), file_path);
        Ok(corpus)
    }

    pub fn from_json(json: &Value) -> Result<Corpus> {

        match json {
            Value::Array(items) => {
                let sequences = parse_sequences(items)?;
                let labels = (0..sequences.len()).map(|i| i.to_string()).collect();
                Ok(Corpus { labels: labels, sequences: sequences })
            },
            Value::Object(map) => {
                let items = match map.get("sequences") {
                    Some(Value::Array(items)) => items,
                    _ => return Err(Error::Config("corpus object needs a \"sequences\" array".to_string()))
                };
                let sequences = parse_sequences(items)?;
                let labels = match map.get("ids") {
                    Some(ids) => parse_ids(ids, sequences.len())?,
                    None => (0..sequences.len()).map(|i| i.to_string()).collect()
                };
                Ok(Corpus { labels: labels, sequences: sequences })
            },
            _ => Err(Error::Config("corpus must be a JSON array or object".to_string()))
        }
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}


fn parse_sequences(items: &[Value]) -> Result<Vec<Vec<Vec<String>>>> {
    items.iter().enumerate().map(|(k, item)| parse_sequence(k, item)).collect()
}

// malformed entries fail fast with their position instead of being read as empty
fn parse_sequence(k: usize, item: &Value) -> Result<Vec<Vec<String>>> {

    let itemsets = item.as_array().ok_or_else(|| Error::InvalidCorpus {
        sequence: k,
        reason: "sequence is not an array of itemsets".to_string()
    })?;

    itemsets.iter().enumerate().map(|(i, itemset)| {
        let labels = itemset.as_array().ok_or_else(|| Error::InvalidCorpus {
            sequence: k,
            reason: format!("itemset {} is not an array of labels", i)
        })?;
        labels.iter().map(|label| {
            label.as_str().map(|s| s.to_owned()).ok_or_else(|| Error::InvalidCorpus {
                sequence: k,
                reason: format!("itemset {} holds a non-string label {}", i, label)
            })
        }).collect::<Result<Vec<String>>>()
    }).collect()
}

fn parse_ids(ids: &Value, n: usize) -> Result<Vec<String>> {

    let ids = ids.as_array().ok_or_else(|| Error::Config("\"ids\" must be an array".to_string()))?;
    if ids.len() != n {
        return Err(Error::Config(format!("{} ids for {} sequences", ids.len(), n)))
    }

    // numeric ids are accepted and rendered as text
    ids.iter().map(|id| match id {
        Value::String(s) => Ok(s.to_owned()),
        Value::Number(x) => Ok(x.to_string()),
        other => Err(Error::Config(format!("unsupported id {}", other)))
    }).collect()
}
