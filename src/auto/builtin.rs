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

use crate::auto::modeling::MODEL_WEIGHTS_FILE;
use crate::common::error::AutoNlpError;
use crate::resources::{url_resource, ResourceProvider};

/// # BERT pretrained vocabulary files
pub struct BertVocabResources;
/// # BERT pretrained model weight files
pub struct BertModelResources;
/// # ERNIE pretrained vocabulary files
pub struct ErnieVocabResources;
/// # ERNIE pretrained model weight files
pub struct ErnieModelResources;
/// # RoBERTa (Chinese whole word masking) pretrained vocabulary files
pub struct RobertaVocabResources;
/// # RoBERTa (Chinese whole word masking) pretrained model weight files
pub struct RobertaModelResources;

impl BertVocabResources {
    pub const BERT_BASE_UNCASED: (&'static str, &'static str) = (
        "bert-base-uncased/vocab",
        "https://bj.bcebos.com/paddle-hapi/models/bert/bert-base-uncased-vocab.txt",
    );
    pub const BERT_LARGE_UNCASED: (&'static str, &'static str) = (
        "bert-large-uncased/vocab",
        "https://bj.bcebos.com/paddle-hapi/models/bert/bert-large-uncased-vocab.txt",
    );
    pub const BERT_BASE_CASED: (&'static str, &'static str) = (
        "bert-base-cased/vocab",
        "https://bj.bcebos.com/paddle-hapi/models/bert/bert-base-cased-vocab.txt",
    );
    pub const BERT_LARGE_CASED: (&'static str, &'static str) = (
        "bert-large-cased/vocab",
        "https://bj.bcebos.com/paddle-hapi/models/bert/bert-large-cased-vocab.txt",
    );
    pub const BERT_BASE_CHINESE: (&'static str, &'static str) = (
        "bert-base-chinese/vocab",
        "https://bj.bcebos.com/paddle-hapi/models/bert/bert-base-chinese-vocab.txt",
    );
}

impl BertModelResources {
    pub const BERT_BASE_UNCASED: (&'static str, &'static str) = (
        "bert-base-uncased/model",
        "https://bj.bcebos.com/paddlenlp/models/transformers/bert-base-uncased.pdparams",
    );
    pub const BERT_LARGE_UNCASED: (&'static str, &'static str) = (
        "bert-large-uncased/model",
        "https://bj.bcebos.com/paddlenlp/models/transformers/bert-large-uncased.pdparams",
    );
    pub const BERT_BASE_CASED: (&'static str, &'static str) = (
        "bert-base-cased/model",
        "https://bj.bcebos.com/paddlenlp/models/transformers/bert-base-cased.pdparams",
    );
    pub const BERT_LARGE_CASED: (&'static str, &'static str) = (
        "bert-large-cased/model",
        "https://bj.bcebos.com/paddlenlp/models/transformers/bert-large-cased.pdparams",
    );
    pub const BERT_BASE_CHINESE: (&'static str, &'static str) = (
        "bert-base-chinese/model",
        "https://bj.bcebos.com/paddlenlp/models/transformers/bert-base-chinese.pdparams",
    );
}

impl ErnieVocabResources {
    pub const ERNIE_1_0: (&'static str, &'static str) = (
        "ernie-1.0/vocab",
        "https://bj.bcebos.com/paddlenlp/models/transformers/ernie/vocab.txt",
    );
    pub const ERNIE_2_0_EN: (&'static str, &'static str) = (
        "ernie-2.0-en/vocab",
        "https://bj.bcebos.com/paddlenlp/models/transformers/ernie_v2_base/vocab.txt",
    );
    pub const ERNIE_2_0_LARGE_EN: (&'static str, &'static str) = (
        "ernie-2.0-large-en/vocab",
        "https://bj.bcebos.com/paddlenlp/models/transformers/ernie_v2_large/vocab.txt",
    );
}

impl ErnieModelResources {
    pub const ERNIE_1_0: (&'static str, &'static str) = (
        "ernie-1.0/model",
        "https://bj.bcebos.com/paddlenlp/models/transformers/ernie/ernie_v1_chn_base.pdparams",
    );
    pub const ERNIE_2_0_EN: (&'static str, &'static str) = (
        "ernie-2.0-en/model",
        "https://bj.bcebos.com/paddlenlp/models/transformers/ernie_v2_base/ernie_v2_eng_base.pdparams",
    );
    pub const ERNIE_2_0_LARGE_EN: (&'static str, &'static str) = (
        "ernie-2.0-large-en/model",
        "https://bj.bcebos.com/paddlenlp/models/transformers/ernie_v2_large/ernie_v2_eng_large.pdparams",
    );
}

impl RobertaVocabResources {
    pub const ROBERTA_WWM_EXT: (&'static str, &'static str) = (
        "roberta-wwm-ext/vocab",
        "https://bj.bcebos.com/paddlenlp/models/transformers/roberta_base/vocab.txt",
    );
    pub const RBT3: (&'static str, &'static str) = (
        "rbt3/vocab",
        "https://bj.bcebos.com/paddlenlp/models/transformers/rbt3/vocab.txt",
    );
}

impl RobertaModelResources {
    pub const ROBERTA_WWM_EXT: (&'static str, &'static str) = (
        "roberta-wwm-ext/model",
        "https://bj.bcebos.com/paddlenlp/models/transformers/roberta_base/roberta_chn_base.pdparams",
    );
    pub const RBT3: (&'static str, &'static str) = (
        "rbt3/model",
        "https://bj.bcebos.com/paddlenlp/models/transformers/rbt3/rbt3_chn_large.pdparams",
    );
}

const VOCAB_FILE: &str = "vocab.txt";

/// Hosted files of built-in checkpoints: identifier, file name, (cache subdirectory, url).
pub static BUILTIN_RESOURCE_FILES: &[(&str, &str, (&str, &str))] = &[
    ("bert-base-uncased", VOCAB_FILE, BertVocabResources::BERT_BASE_UNCASED),
    ("bert-base-uncased", MODEL_WEIGHTS_FILE, BertModelResources::BERT_BASE_UNCASED),
    ("bert-large-uncased", VOCAB_FILE, BertVocabResources::BERT_LARGE_UNCASED),
    ("bert-large-uncased", MODEL_WEIGHTS_FILE, BertModelResources::BERT_LARGE_UNCASED),
    ("bert-base-cased", VOCAB_FILE, BertVocabResources::BERT_BASE_CASED),
    ("bert-base-cased", MODEL_WEIGHTS_FILE, BertModelResources::BERT_BASE_CASED),
    ("bert-large-cased", VOCAB_FILE, BertVocabResources::BERT_LARGE_CASED),
    ("bert-large-cased", MODEL_WEIGHTS_FILE, BertModelResources::BERT_LARGE_CASED),
    ("bert-base-chinese", VOCAB_FILE, BertVocabResources::BERT_BASE_CHINESE),
    ("bert-base-chinese", MODEL_WEIGHTS_FILE, BertModelResources::BERT_BASE_CHINESE),
    ("ernie-1.0", VOCAB_FILE, ErnieVocabResources::ERNIE_1_0),
    ("ernie-1.0", MODEL_WEIGHTS_FILE, ErnieModelResources::ERNIE_1_0),
    ("ernie-2.0-en", VOCAB_FILE, ErnieVocabResources::ERNIE_2_0_EN),
    ("ernie-2.0-en", MODEL_WEIGHTS_FILE, ErnieModelResources::ERNIE_2_0_EN),
    ("ernie-2.0-large-en", VOCAB_FILE, ErnieVocabResources::ERNIE_2_0_LARGE_EN),
    ("ernie-2.0-large-en", MODEL_WEIGHTS_FILE, ErnieModelResources::ERNIE_2_0_LARGE_EN),
    ("roberta-wwm-ext", VOCAB_FILE, RobertaVocabResources::ROBERTA_WWM_EXT),
    ("roberta-wwm-ext", MODEL_WEIGHTS_FILE, RobertaModelResources::ROBERTA_WWM_EXT),
    ("rbt3", VOCAB_FILE, RobertaVocabResources::RBT3),
    ("rbt3", MODEL_WEIGHTS_FILE, RobertaModelResources::RBT3),
];

/// Hosted copy of `file_name` for the built-in checkpoint `identifier`.
///
/// Built-in checkpoints without a registered hosted file (including bare registry keys such as
/// `bert`) return `AutoNlpError::Unsupported`: download the files to a directory and load from
/// there instead.
pub fn builtin_resource(
    identifier: &str,
    file_name: &str,
) -> Result<Box<dyn ResourceProvider>, AutoNlpError> {
    match BUILTIN_RESOURCE_FILES
        .iter()
        .find(|(name, file, _)| *name == identifier && *file == file_name)
    {
        Some((_, _, (cache_subdir, url))) => url_resource(url, cache_subdir),
        None => Err(AutoNlpError::Unsupported(format!(
            "no hosted `{}` registered for built-in `{}`, load it from a local directory",
            file_name, identifier
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auto::family::ModelFamily;

    #[test]
    fn table_entries_are_builtin_names() {
        for (identifier, _, (cache_subdir, url)) in BUILTIN_RESOURCE_FILES {
            assert!(ModelFamily::from_builtin(identifier).is_some(), "{}", identifier);
            assert!(cache_subdir.starts_with(identifier));
            assert!(url.starts_with("https://bj.bcebos.com/"));
            assert!(!url.contains("/community/"));
        }
    }

    #[test]
    fn unregistered_files_are_unsupported() {
        for (identifier, file_name) in &[
            ("electra-small", VOCAB_FILE),
            ("bert", VOCAB_FILE),
            ("bert-base-uncased", "spiece.model"),
        ] {
            assert!(matches!(
                builtin_resource(identifier, file_name),
                Err(AutoNlpError::Unsupported(_))
            ));
        }
    }

    #[cfg(feature = "remote")]
    #[test]
    fn registered_files_point_to_hosted_urls() -> Result<(), AutoNlpError> {
        let resource = builtin_resource("bert-base-uncased", VOCAB_FILE)?;
        let description = format!("{:?}", resource);
        assert!(description.contains(BertVocabResources::BERT_BASE_UNCASED.1));
        assert!(description.contains(BertVocabResources::BERT_BASE_UNCASED.0));
        Ok(())
    }
}
