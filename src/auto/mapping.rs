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

//! Static name registries. Each table maps a family to the class implementing it for one task
//! head; table order is the order in which substring patterns are tried.

use crate::auto::family::ModelFamily;
use serde::{Deserialize, Serialize};
use std::fmt;

pub static MODEL_MAPPING_NAMES: &[(ModelFamily, &str)] = &[
    (ModelFamily::Albert, "AlbertModel"),
    (ModelFamily::Bart, "BartModel"),
    (ModelFamily::Bert, "BertModel"),
    (ModelFamily::BigBird, "BigBirdModel"),
    (ModelFamily::ConvBert, "ConvBertModel"),
    (ModelFamily::DistilBert, "DistilBertModel"),
    (ModelFamily::Electra, "ElectraModel"),
    (ModelFamily::Ernie, "ErnieModel"),
    (ModelFamily::ErnieCtm, "ErnieCtmModel"),
    (ModelFamily::ErnieDoc, "ErnieDocModel"),
    (ModelFamily::ErnieGen, "ErnieForGeneration"),
    (ModelFamily::ErnieGram, "ErnieGramModel"),
    (ModelFamily::Gpt, "GPTModel"),
    (ModelFamily::MPNet, "MPNetModel"),
    (ModelFamily::NeZha, "NeZhaModel"),
    (ModelFamily::Roberta, "RobertaModel"),
    (ModelFamily::RoFormer, "RoFormerModel"),
    (ModelFamily::Skep, "SkepModel"),
    (ModelFamily::TinyBert, "TinyBertModel"),
    (ModelFamily::Unimo, "UNIMOModel"),
    (ModelFamily::XLNet, "XLNetModel"),
];

pub static MODEL_FOR_PRETRAINING_MAPPING_NAMES: &[(ModelFamily, &str)] = &[
    (ModelFamily::Albert, "AlbertForPretraining"),
    (ModelFamily::Bart, "BartForConditionalGeneration"),
    (ModelFamily::Bert, "BertForPretraining"),
    (ModelFamily::BigBird, "BigBirdForPretraining"),
    (ModelFamily::ConvBert, "ConvBertForTotalPretraining"),
    (ModelFamily::Electra, "ElectraForTotalPretraining"),
    (ModelFamily::Ernie, "ErnieForPretraining"),
    (ModelFamily::Gpt, "GPTForPretraining"),
    (ModelFamily::NeZha, "NeZhaForPretraining"),
    (ModelFamily::RoFormer, "RoFormerForPretraining"),
    (ModelFamily::TinyBert, "TinyBertForPretraining"),
];

pub static MODEL_WITH_LM_HEAD_MAPPING_NAMES: &[(ModelFamily, &str)] = &[
    (ModelFamily::Albert, "AlbertForMaskedLM"),
    (ModelFamily::Bart, "BartForConditionalGeneration"),
    (ModelFamily::Bert, "BertPretrainingHeads"),
    (ModelFamily::BigBird, "BigBirdPretrainingHeads"),
    (ModelFamily::ConvBert, "ConvBertClassificationHead"),
    (ModelFamily::DistilBert, "DistilBertForMaskedLM"),
    (ModelFamily::Electra, "ElectraClassificationHead"),
    (ModelFamily::Gpt, "GPTLMHeadModel"),
    (ModelFamily::MPNet, "MPNetForMaskedLM"),
    (ModelFamily::NeZha, "NeZhaPretrainingHeads"),
    (ModelFamily::RoFormer, "RoFormerPretrainingHeads"),
    (ModelFamily::Unimo, "UNIMOLMHeadModel"),
];

pub static MODEL_FOR_MASKED_LM_MAPPING_NAMES: &[(ModelFamily, &str)] = &[
    (ModelFamily::Albert, "AlbertForMaskedLM"),
    (ModelFamily::Bart, "BartForConditionalGeneration"),
    (ModelFamily::DistilBert, "DistilBertForMaskedLM"),
    (ModelFamily::Electra, "ElectraForMaskedLM"),
    (ModelFamily::MPNet, "MPNetForMaskedLM"),
    (ModelFamily::Roberta, "RobertaForMaskedLM"),
];

pub static MODEL_FOR_SEQUENCE_CLASSIFICATION_MAPPING_NAMES: &[(ModelFamily, &str)] = &[
    (ModelFamily::Albert, "AlbertForSequenceClassification"),
    (ModelFamily::Bart, "BartForSequenceClassification"),
    (ModelFamily::Bert, "BertForSequenceClassification"),
    (ModelFamily::BigBird, "BigBirdForSequenceClassification"),
    (ModelFamily::ConvBert, "ConvBertForSequenceClassification"),
    (ModelFamily::DistilBert, "DistilBertForSequenceClassification"),
    (ModelFamily::Electra, "ElectraForSequenceClassification"),
    (ModelFamily::Ernie, "ErnieForSequenceClassification"),
    (ModelFamily::ErnieDoc, "ErnieDocForSequenceClassification"),
    (ModelFamily::ErnieGram, "ErnieGramForSequenceClassification"),
    (ModelFamily::Gpt, "GPTForSequenceClassification"),
    (ModelFamily::MPNet, "MPNetForSequenceClassification"),
    (ModelFamily::NeZha, "NeZhaForSequenceClassification"),
    (ModelFamily::Roberta, "RobertaForSequenceClassification"),
    (ModelFamily::RoFormer, "RoFormerForSequenceClassification"),
    (ModelFamily::Skep, "SkepForSequenceClassification"),
    (ModelFamily::XLNet, "XLNetForSequenceClassification"),
];

pub static MODEL_FOR_QUESTION_ANSWERING_MAPPING_NAMES: &[(ModelFamily, &str)] = &[
    (ModelFamily::Bart, "BartForQuestionAnswering"),
    (ModelFamily::Bert, "BertForQuestionAnswering"),
    (ModelFamily::ConvBert, "ConvBertForQuestionAnswering"),
    (ModelFamily::DistilBert, "DistilBertForQuestionAnswering"),
    (ModelFamily::Ernie, "ErnieForQuestionAnswering"),
    (ModelFamily::ErnieDoc, "ErnieDocForQuestionAnswering"),
    (ModelFamily::ErnieGram, "ErnieGramForQuestionAnswering"),
    (ModelFamily::MPNet, "MPNetForQuestionAnswering"),
    (ModelFamily::NeZha, "NeZhaForQuestionAnswering"),
    (ModelFamily::Roberta, "RobertaForQuestionAnswering"),
    (ModelFamily::RoFormer, "RoFormerForQuestionAnswering"),
];

pub static MODEL_FOR_TOKEN_CLASSIFICATION_MAPPING_NAMES: &[(ModelFamily, &str)] = &[
    (ModelFamily::Albert, "AlbertForTokenClassification"),
    (ModelFamily::Bert, "BertForTokenClassification"),
    (ModelFamily::BigBird, "BigBirdForTokenClassification"),
    (ModelFamily::ConvBert, "ConvBertForTokenClassification"),
    (ModelFamily::DistilBert, "DistilBertForTokenClassification"),
    (ModelFamily::Electra, "ElectraForTokenClassification"),
    (ModelFamily::Ernie, "ErnieForTokenClassification"),
    (ModelFamily::ErnieCtm, "ErnieCtmForTokenClassification"),
    (ModelFamily::ErnieDoc, "ErnieDocForTokenClassification"),
    (ModelFamily::ErnieGram, "ErnieGramForTokenClassification"),
    (ModelFamily::MPNet, "MPNetForTokenClassification"),
    (ModelFamily::NeZha, "NeZhaForTokenClassification"),
    (ModelFamily::Roberta, "RobertaForTokenClassification"),
    (ModelFamily::RoFormer, "RoFormerForTokenClassification"),
    (ModelFamily::Skep, "SkepForTokenClassification"),
    (ModelFamily::XLNet, "XLNetForTokenClassification"),
];

pub static MODEL_FOR_MULTIPLE_CHOICE_MAPPING_NAMES: &[(ModelFamily, &str)] = &[
    (ModelFamily::Albert, "AlbertForMultipleChoice"),
    (ModelFamily::ConvBert, "ConvBertForMultipleChoice"),
    (ModelFamily::MPNet, "MPNetForMultipleChoice"),
    (ModelFamily::NeZha, "NeZhaForMultipleChoice"),
];

pub static ENCODER_MAPPING_NAMES: &[(ModelFamily, &str)] = &[(ModelFamily::Bart, "BartEncoder")];

pub static DECODER_MAPPING_NAMES: &[(ModelFamily, &str)] = &[(ModelFamily::Bart, "BartDecoder")];

pub static GENERATOR_MAPPING_NAMES: &[(ModelFamily, &str)] = &[
    (ModelFamily::ConvBert, "ConvBertGenerator"),
    (ModelFamily::Electra, "ElectraGenerator"),
];

pub static DISCRIMINATOR_MAPPING_NAMES: &[(ModelFamily, &str)] = &[
    (ModelFamily::ConvBert, "ConvBertDiscriminator"),
    (ModelFamily::Electra, "ElectraDiscriminator"),
];

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
/// # Task head a model class is built for
pub enum ModelHead {
    Base,
    Pretraining,
    LMHead,
    MaskedLM,
    SequenceClassification,
    QuestionAnswering,
    TokenClassification,
    MultipleChoice,
    Encoder,
    Decoder,
    Generator,
    Discriminator,
}

impl ModelHead {
    pub const ALL: [ModelHead; 12] = [
        ModelHead::Base,
        ModelHead::Pretraining,
        ModelHead::LMHead,
        ModelHead::MaskedLM,
        ModelHead::SequenceClassification,
        ModelHead::QuestionAnswering,
        ModelHead::TokenClassification,
        ModelHead::MultipleChoice,
        ModelHead::Encoder,
        ModelHead::Decoder,
        ModelHead::Generator,
        ModelHead::Discriminator,
    ];

    /// Ordered name table of the head.
    pub fn mapping_names(&self) -> &'static [(ModelFamily, &'static str)] {
        match self {
            Self::Base => MODEL_MAPPING_NAMES,
            Self::Pretraining => MODEL_FOR_PRETRAINING_MAPPING_NAMES,
            Self::LMHead => MODEL_WITH_LM_HEAD_MAPPING_NAMES,
            Self::MaskedLM => MODEL_FOR_MASKED_LM_MAPPING_NAMES,
            Self::SequenceClassification => MODEL_FOR_SEQUENCE_CLASSIFICATION_MAPPING_NAMES,
            Self::QuestionAnswering => MODEL_FOR_QUESTION_ANSWERING_MAPPING_NAMES,
            Self::TokenClassification => MODEL_FOR_TOKEN_CLASSIFICATION_MAPPING_NAMES,
            Self::MultipleChoice => MODEL_FOR_MULTIPLE_CHOICE_MAPPING_NAMES,
            Self::Encoder => ENCODER_MAPPING_NAMES,
            Self::Decoder => DECODER_MAPPING_NAMES,
            Self::Generator => GENERATOR_MAPPING_NAMES,
            Self::Discriminator => DISCRIMINATOR_MAPPING_NAMES,
        }
    }

    /// Class implementing `family` for this head, if the family supports it.
    pub fn class_for(&self, family: ModelFamily) -> Option<ModelClass> {
        self.mapping_names()
            .iter()
            .find(|(candidate, _)| *candidate == family)
            .map(|_| ModelClass { family, head: *self })
    }

    /// First class of the table whose family key is a substring of `name`.
    /// `name` is expected to be lowercased already.
    pub fn class_matching(&self, name: &str) -> Option<ModelClass> {
        self.mapping_names()
            .iter()
            .find(|(family, _)| name.contains(family.key()))
            .map(|(family, _)| ModelClass {
                family: *family,
                head: *self,
            })
    }
}

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq, Hash)]
/// # Concrete model class: a family implemented for a task head
/// Only pairs registered in the head's table can be built.
pub struct ModelClass {
    family: ModelFamily,
    head: ModelHead,
}

impl ModelClass {
    /// Class of `family` for `head`, if the head's table registers one.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_autonlp::auto::{ModelClass, ModelFamily, ModelHead};
    /// let class = ModelClass::new(ModelFamily::Ernie, ModelHead::SequenceClassification).unwrap();
    /// assert_eq!(class.name(), "ErnieForSequenceClassification");
    /// assert!(ModelClass::new(ModelFamily::Bert, ModelHead::Encoder).is_none());
    /// ```
    pub fn new(family: ModelFamily, head: ModelHead) -> Option<ModelClass> {
        head.class_for(family)
    }

    pub fn family(&self) -> ModelFamily {
        self.family
    }

    pub fn head(&self) -> ModelHead {
        self.head
    }

    /// Class name as registered in the head's table.
    pub fn name(&self) -> &'static str {
        self.head
            .mapping_names()
            .iter()
            .find(|(family, _)| *family == self.family)
            .map(|(_, name)| *name)
            .unwrap_or("")
    }

    /// Looks up a class by its exact name. The table of `preferred` is searched first, then all
    /// other heads in declaration order, so that a name registered under several heads resolves
    /// to the head being asked for.
    pub fn from_name(name: &str, preferred: ModelHead) -> Option<ModelClass> {
        std::iter::once(preferred)
            .chain(ModelHead::ALL.iter().copied().filter(|head| *head != preferred))
            .find_map(|head| {
                head.mapping_names()
                    .iter()
                    .find(|(_, class_name)| *class_name == name)
                    .map(|(family, _)| ModelClass {
                        family: *family,
                        head,
                    })
            })
    }
}

impl fmt::Display for ModelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub static TOKENIZER_MAPPING_NAMES: &[(TokenizerClass, &str)] = &[
    (TokenizerClass::Albert, "albert"),
    (TokenizerClass::Bart, "bart"),
    (TokenizerClass::BigBird, "bigbird"),
    (TokenizerClass::ConvBert, "convbert"),
    (TokenizerClass::DistilBert, "distilbert"),
    (TokenizerClass::Electra, "electra"),
    (TokenizerClass::Skep, "skep"),
    (TokenizerClass::ErnieCtm, "ernie-ctm"),
    (TokenizerClass::ErnieDoc, "ernie-doc"),
    (TokenizerClass::ErnieGram, "ernie-gram"),
    (TokenizerClass::Ernie, "ernie"),
    (TokenizerClass::Gpt, "gpt"),
    (TokenizerClass::MPNet, "mpnet"),
    (TokenizerClass::NeZha, "nezha"),
    (TokenizerClass::Roberta, "roberta"),
    (TokenizerClass::RoFormer, "roformer"),
    (TokenizerClass::TinyBert, "tinybert"),
    (TokenizerClass::Bert, "bert"),
    (TokenizerClass::UnifiedTransformer, "unified_transformer"),
    (TokenizerClass::Unimo, "unimo"),
    (TokenizerClass::XLNet, "xlnet"),
];

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
/// # Concrete tokenizer class
pub enum TokenizerClass {
    Albert,
    Bart,
    BigBird,
    ConvBert,
    DistilBert,
    Electra,
    Skep,
    ErnieCtm,
    ErnieDoc,
    ErnieGram,
    Ernie,
    Gpt,
    MPNet,
    NeZha,
    Roberta,
    RoFormer,
    TinyBert,
    Bert,
    UnifiedTransformer,
    Unimo,
    XLNet,
}

impl TokenizerClass {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Albert => "AlbertTokenizer",
            Self::Bart => "BartTokenizer",
            Self::BigBird => "BigBirdTokenizer",
            Self::ConvBert => "ConvBertTokenizer",
            Self::DistilBert => "DistilBertTokenizer",
            Self::Electra => "ElectraTokenizer",
            Self::Skep => "SkepTokenizer",
            Self::ErnieCtm => "ErnieCtmTokenizer",
            Self::ErnieDoc => "ErnieDocTokenizer",
            Self::ErnieGram => "ErnieGramTokenizer",
            Self::Ernie => "ErnieTokenizer",
            Self::Gpt => "GPTTokenizer",
            Self::MPNet => "MPNetTokenizer",
            Self::NeZha => "NeZhaTokenizer",
            Self::Roberta => "RobertaTokenizer",
            Self::RoFormer => "RoFormerTokenizer",
            Self::TinyBert => "TinyBertTokenizer",
            Self::Bert => "BertTokenizer",
            Self::UnifiedTransformer => "UnifiedTransformerTokenizer",
            Self::Unimo => "UNIMOTokenizer",
            Self::XLNet => "XLNetTokenizer",
        }
    }

    /// Substring pattern registered for the class.
    pub fn pattern(&self) -> &'static str {
        TOKENIZER_MAPPING_NAMES
            .iter()
            .find(|(class, _)| class == self)
            .map(|(_, pattern)| *pattern)
            .unwrap_or("")
    }

    /// Tokenizer used by the pretrained checkpoints of `family`.
    pub fn for_family(family: ModelFamily) -> Option<TokenizerClass> {
        TOKENIZER_MAPPING_NAMES
            .iter()
            .find(|(_, pattern)| *pattern == family.key())
            .map(|(class, _)| *class)
    }

    pub fn from_name(name: &str) -> Option<TokenizerClass> {
        TOKENIZER_MAPPING_NAMES
            .iter()
            .find(|(class, _)| class.name() == name)
            .map(|(class, _)| *class)
    }

    /// First class of the table whose pattern is a substring of `name`.
    /// `name` is expected to be lowercased already.
    pub fn matching(name: &str) -> Option<TokenizerClass> {
        TOKENIZER_MAPPING_NAMES
            .iter()
            .find(|(_, pattern)| name.contains(pattern))
            .map(|(class, _)| *class)
    }
}

impl fmt::Display for TokenizerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
