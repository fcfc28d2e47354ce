// Copyright 2022 The rust-autonlp Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::common::error::AutoNlpError;
use crate::pipelines::common::Encode;
use crate::pipelines::similarity::tokenizer::Language;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// # Encoded sentence pair
/// Model inputs of a similarity network, lengths being the number of ids of each side.
pub struct SimilarityFeatures {
    pub query_ids: Vec<i64>,
    pub title_ids: Vec<i64>,
    pub query_seq_len: i64,
    pub title_seq_len: i64,
    /// `None` for test / inference examples
    pub label: Option<i64>,
}

impl SimilarityFeatures {
    fn from_pair<T: Encode + ?Sized>(query: &str, title: &str, tokenizer: &T) -> Self {
        let query_ids = tokenizer.encode(query);
        let title_ids = tokenizer.encode(title);
        SimilarityFeatures {
            query_seq_len: query_ids.len() as i64,
            title_seq_len: title_ids.len() as i64,
            query_ids,
            title_ids,
            label: None,
        }
    }
}

fn text_field<'a>(example: &'a Value, field: &str) -> Result<&'a str, AutoNlpError> {
    match example.get(field) {
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(AutoNlpError::InvalidInput(format!(
            "field `{}` must be a string, got {}",
            field, other
        ))),
        None => Err(AutoNlpError::InvalidInput(format!(
            "missing field `{}` in example",
            field
        ))),
    }
}

fn label_field(example: &Value, field: &str) -> Result<i64, AutoNlpError> {
    let value = example.get(field).ok_or_else(|| {
        AutoNlpError::InvalidInput(format!("missing field `{}` in example", field))
    })?;
    let label = match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.fract() == 0.0 && float.abs() <= i64::MAX as f64)
                .map(|float| float as i64)
        }),
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    label.ok_or_else(|| {
        AutoNlpError::InvalidInput(format!(
            "field `{}` must be an integer label, got {}",
            field, value
        ))
    })
}

/// Encodes one example record into model inputs.
///
/// # Arguments
///
/// * `example` - JSON object holding the two texts and, for training data, the label
/// * `tokenizer` - any `Encode` implementation
/// * `is_test` - skip the label when set
/// * `language` - selects the field names (see `Language::field_names`)
///
/// # Example
///
/// ```
/// use rust_autonlp::pipelines::similarity::{convert_example, CharTokenizer, Language, WordVocab};
/// use serde_json::json;
///
/// let vocab = WordVocab::from_tokens(vec!["[UNK]", "a", "b"], "[UNK]")?;
/// let tokenizer = CharTokenizer::new(vocab, Language::Chinese)?;
/// let features = convert_example(
///     &json!({"query": "a", "title": "b", "label": 1}),
///     &tokenizer,
///     false,
///     Language::Chinese,
/// )?;
/// assert_eq!(features.label, Some(1));
/// # Ok::<(), rust_autonlp::AutoNlpError>(())
/// ```
pub fn convert_example<T: Encode + ?Sized>(
    example: &Value,
    tokenizer: &T,
    is_test: bool,
    language: Language,
) -> Result<SimilarityFeatures, AutoNlpError> {
    if !example.is_object() {
        return Err(AutoNlpError::InvalidInput(format!(
            "example must be a JSON object, got {}",
            example
        )));
    }
    let (query_field, title_field, label_field_name) = language.field_names();
    let query = text_field(example, query_field)?;
    let title = text_field(example, title_field)?;
    let mut features = SimilarityFeatures::from_pair(query, title, tokenizer);
    if !is_test {
        features.label = Some(label_field(example, label_field_name)?);
    }
    Ok(features)
}

/// Encodes `(query, title)` pairs for inference, preserving their order.
pub fn preprocess_prediction_data<S, T>(pairs: &[(S, S)], tokenizer: &T) -> Vec<SimilarityFeatures>
where
    S: AsRef<str>,
    T: Encode + ?Sized,
{
    pairs
        .iter()
        .map(|(query, title)| SimilarityFeatures::from_pair(query.as_ref(), title.as_ref(), tokenizer))
        .collect()
}

/// Encodes unlabelled example records, preserving their order.
/// The first malformed record aborts the whole batch.
pub fn preprocess_data<T: Encode + ?Sized>(
    examples: &[Value],
    tokenizer: &T,
    language: Language,
) -> Result<Vec<SimilarityFeatures>, AutoNlpError> {
    examples
        .iter()
        .map(|example| convert_example(example, tokenizer, true, language))
        .collect()
}
