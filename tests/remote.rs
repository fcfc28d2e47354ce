#![cfg(feature = "remote")]

use rust_autonlp::auto::{AutoTokenizer, TokenizerClass};
use rust_autonlp::pipelines::common::{Encode, PretrainedTokenizer};
use rust_autonlp::InitKwargs;

#[test]
#[cfg_attr(not(feature = "all-tests"), ignore)]
fn community_tokenizer_from_hub() -> anyhow::Result<()> {
    let resolution = AutoTokenizer::resolve("junnyu/ckiplab-bert-base-chinese-ner")?;
    assert_eq!(resolution.class, TokenizerClass::Bert);

    let tokenizer: PretrainedTokenizer = AutoTokenizer::from_pretrained(
        "junnyu/ckiplab-bert-base-chinese-ner",
        &InitKwargs::new(),
    )?;
    assert!(!tokenizer.encode("我爱你").is_empty());
    Ok(())
}
