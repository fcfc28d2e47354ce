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

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
/// # Identifies a transformer architecture
pub enum ModelFamily {
    Albert,
    Bart,
    Bert,
    BigBird,
    ConvBert,
    DistilBert,
    Electra,
    Ernie,
    ErnieCtm,
    ErnieDoc,
    ErnieGen,
    ErnieGram,
    Gpt,
    MPNet,
    NeZha,
    Roberta,
    RoFormer,
    Skep,
    TinyBert,
    UnifiedTransformer,
    Unimo,
    XLNet,
}

impl ModelFamily {
    /// All families, in registry order.
    pub const ALL: [ModelFamily; 22] = [
        ModelFamily::Albert,
        ModelFamily::Bart,
        ModelFamily::Bert,
        ModelFamily::BigBird,
        ModelFamily::ConvBert,
        ModelFamily::DistilBert,
        ModelFamily::Electra,
        ModelFamily::Ernie,
        ModelFamily::ErnieCtm,
        ModelFamily::ErnieDoc,
        ModelFamily::ErnieGen,
        ModelFamily::ErnieGram,
        ModelFamily::Gpt,
        ModelFamily::MPNet,
        ModelFamily::NeZha,
        ModelFamily::Roberta,
        ModelFamily::RoFormer,
        ModelFamily::Skep,
        ModelFamily::TinyBert,
        ModelFamily::UnifiedTransformer,
        ModelFamily::Unimo,
        ModelFamily::XLNet,
    ];

    /// Registry key of the family. Also used as the substring pattern when a class has to be
    /// inferred from an identifier.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Albert => "albert",
            Self::Bart => "bart",
            Self::Bert => "bert",
            Self::BigBird => "bigbird",
            Self::ConvBert => "convbert",
            Self::DistilBert => "distilbert",
            Self::Electra => "electra",
            Self::Ernie => "ernie",
            Self::ErnieCtm => "ernie-ctm",
            Self::ErnieDoc => "ernie-doc",
            Self::ErnieGen => "ernie-gen",
            Self::ErnieGram => "ernie-gram",
            Self::Gpt => "gpt",
            Self::MPNet => "mpnet",
            Self::NeZha => "nezha",
            Self::Roberta => "roberta",
            Self::RoFormer => "roformer",
            Self::Skep => "skep",
            Self::TinyBert => "tinybert",
            Self::UnifiedTransformer => "unified_transformer",
            Self::Unimo => "unimo",
            Self::XLNet => "xlnet",
        }
    }

    /// Identifiers of the built-in pretrained checkpoints of the family.
    pub fn pretrained_names(&self) -> &'static [&'static str] {
        match self {
            Self::Albert => &[
                "albert-base-v1",
                "albert-large-v1",
                "albert-xlarge-v1",
                "albert-xxlarge-v1",
                "albert-base-v2",
                "albert-large-v2",
                "albert-xlarge-v2",
                "albert-xxlarge-v2",
                "albert-chinese-tiny",
                "albert-chinese-small",
                "albert-chinese-base",
                "albert-chinese-large",
                "albert-chinese-xlarge",
                "albert-chinese-xxlarge",
            ],
            Self::Bart => &["bart-base", "bart-large"],
            Self::Bert => &[
                "bert-base-uncased",
                "bert-large-uncased",
                "bert-base-multilingual-uncased",
                "bert-base-cased",
                "bert-base-chinese",
                "bert-base-multilingual-cased",
                "bert-large-cased",
                "bert-wwm-chinese",
                "bert-wwm-ext-chinese",
                "macbert-base-chinese",
                "macbert-large-chinese",
                "simbert-base-chinese",
            ],
            Self::BigBird => &["bigbird-base-uncased"],
            Self::ConvBert => &["convbert-base", "convbert-medium-small", "convbert-small"],
            Self::DistilBert => &["distilbert-base-uncased", "distilbert-base-cased"],
            Self::Electra => &[
                "electra-small",
                "electra-base",
                "electra-large",
                "chinese-electra-small",
                "chinese-electra-base",
            ],
            Self::Ernie => &["ernie-1.0", "ernie-tiny", "ernie-2.0-en", "ernie-2.0-large-en"],
            Self::ErnieCtm => &["ernie-ctm", "wordtag"],
            Self::ErnieDoc => &["ernie-doc-base-en", "ernie-doc-base-zh"],
            Self::ErnieGen => &[
                "ernie-gen-base-en",
                "ernie-gen-large-en",
                "ernie-gen-large-430g-en",
            ],
            Self::ErnieGram => &["ernie-gram-zh"],
            Self::Gpt => &[
                "gpt-cpm-large-cn",
                "gpt-cpm-small-cn-distill",
                "gpt2-en",
                "gpt2-medium-en",
                "gpt2-large-en",
                "gpt2-xl-en",
            ],
            Self::MPNet => &["mpnet-base"],
            Self::NeZha => &[
                "nezha-base-chinese",
                "nezha-large-chinese",
                "nezha-base-wwm-chinese",
                "nezha-large-wwm-chinese",
            ],
            Self::Roberta => &["roberta-wwm-ext", "roberta-wwm-ext-large", "rbt3", "rbtl3"],
            Self::RoFormer => &[
                "roformer-chinese-small",
                "roformer-chinese-base",
                "roformer-chinese-char-small",
                "roformer-chinese-char-base",
                "roformer-chinese-sim-char-ft-small",
                "roformer-chinese-sim-char-ft-base",
                "roformer-chinese-sim-char-small",
                "roformer-chinese-sim-char-base",
                "roformer-english-small-discriminator",
                "roformer-english-small-generator",
            ],
            Self::Skep => &[
                "skep_ernie_1.0_large_ch",
                "skep_ernie_2.0_large_en",
                "skep_roberta_large_en",
            ],
            Self::TinyBert => &[
                "tinybert-4l-312d",
                "tinybert-6l-768d",
                "tinybert-4l-312d-v2",
                "tinybert-6l-768d-v2",
                "tinybert-4l-312d-zh",
                "tinybert-6l-768d-zh",
            ],
            Self::UnifiedTransformer => &[
                "unified_transformer-12L-cn",
                "unified_transformer-12L-cn-luge",
                "plato-mini",
            ],
            Self::Unimo => &[
                "unimo-text-1.0",
                "unimo-text-1.0-lcsts-new",
                "unimo-text-1.0-large",
            ],
            Self::XLNet => &[
                "xlnet-base-cased",
                "xlnet-large-cased",
                "chinese-xlnet-base",
                "chinese-xlnet-mid",
                "chinese-xlnet-large",
            ],
        }
    }

    /// Looks up a family by registry key or by one of its built-in pretrained identifiers.
    /// Matching is exact and case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_autonlp::auto::ModelFamily;
    /// assert_eq!(ModelFamily::from_builtin("rbt3"), Some(ModelFamily::Roberta));
    /// assert_eq!(ModelFamily::from_builtin("ernie-gram"), Some(ModelFamily::ErnieGram));
    /// assert_eq!(ModelFamily::from_builtin("RBT3"), None);
    /// ```
    pub fn from_builtin(identifier: &str) -> Option<ModelFamily> {
        BUILTIN_NAMES.get(identifier).copied()
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

lazy_static! {
    /// Registry keys and built-in pretrained identifiers, indexed to their family.
    /// The first family declaring a name keeps it.
    static ref BUILTIN_NAMES: HashMap<&'static str, ModelFamily> = {
        let mut names = HashMap::new();
        for family in ModelFamily::ALL.iter() {
            names.entry(family.key()).or_insert(*family);
            for name in family.pretrained_names() {
                names.entry(*name).or_insert(*family);
            }
        }
        names
    };
}
