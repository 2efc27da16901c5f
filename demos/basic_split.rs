//! Split a small mixed-language document with each strategy.

use docsplit::{SplitType, Splitter, SplitterConfig, TextSplitter};

fn main() -> docsplit::Result<()> {
    let text = "# Release notes\n\n\
                The splitter now handles CJK text. It also keeps quoted \"speech. like this\" intact.\n\n\
                新版本支持中文分句。句子按照标点切分！长段落会被继续拆分。\n\n\
                * faster merging\n* bounded chunk sizes";

    for split_type in [SplitType::Paragraph, SplitType::Sentence, SplitType::Length] {
        let config = SplitterConfig::default()
            .with_split_type(split_type)
            .with_chunk_size(60)
            .with_overlap(10);
        let splitter = TextSplitter::new(config)?;

        println!("== {split_type}");
        for content in splitter.split(text)? {
            println!("[{}] {:?}", content.index, content.text);
        }
        println!();
    }

    Ok(())
}
