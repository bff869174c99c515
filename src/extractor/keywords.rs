// file: src/extractor/keywords.rs
// description: frequency and graph keyword extraction over loaded documents
// reference: delegates ranking to the configured KeywordRanker implementations

use crate::config::{RankingConfig, SegmentationConfig};
use crate::error::{Result, TagError};
use crate::extractor::patterns::is_valid_pos_tag;
use crate::extractor::ranker::{JiebaRanker, KeywordRanker, build_jieba};
use crate::models::{Document, KeywordResult};
use crate::utils::OperationTimer;
use std::sync::Arc;
use tracing::debug;

pub struct KeywordExtractor {
    frequency: Box<dyn KeywordRanker>,
    graph: Box<dyn KeywordRanker>,
}

impl KeywordExtractor {
    /// Loads the segmenter once and shares it between both rankers.
    pub fn new(segmentation: &SegmentationConfig, graph_span: usize) -> Result<Self> {
        let timer = OperationTimer::new("load segmentation dictionaries");
        let jieba = Arc::new(build_jieba(segmentation)?);

        let frequency = JiebaRanker::frequency(Arc::clone(&jieba), segmentation)?;
        let graph = JiebaRanker::graph(jieba, segmentation, graph_span)?;
        timer.finish();

        Ok(Self::with_rankers(Box::new(frequency), Box::new(graph)))
    }

    pub fn with_rankers(frequency: Box<dyn KeywordRanker>, graph: Box<dyn KeywordRanker>) -> Self {
        Self { frequency, graph }
    }

    /// TF-IDF ranking. Reference settings: `top_k = 20`, weights on, no
    /// part-of-speech restriction.
    pub fn extract_frequency_keywords(
        &self,
        document: &Document,
        options: &RankingConfig,
    ) -> Result<KeywordResult> {
        extract(self.frequency.as_ref(), document, options)
    }

    /// TextRank ranking. Reference settings: `top_k = 5`, weights on,
    /// `allow_pos = {ns, n, vn, v}`.
    pub fn extract_graph_keywords(
        &self,
        document: &Document,
        options: &RankingConfig,
    ) -> Result<KeywordResult> {
        extract(self.graph.as_ref(), document, options)
    }
}

fn extract(
    ranker: &dyn KeywordRanker,
    document: &Document,
    options: &RankingConfig,
) -> Result<KeywordResult> {
    validate_allow_pos(&options.allow_pos)?;

    if document.is_blank() || options.top_k == 0 {
        debug!("Nothing to rank with {}", ranker.kind());
        return Ok(KeywordResult::empty(options.with_weight));
    }

    let timer = OperationTimer::new(&format!("{} extraction", ranker.kind()));
    let keywords = ranker.rank(document.content(), options.top_k, &options.allow_pos)?;
    timer.finish_with_count(keywords.len());

    Ok(KeywordResult::ranked(
        keywords,
        options.top_k,
        options.with_weight,
    ))
}

fn validate_allow_pos(allow_pos: &[String]) -> Result<()> {
    match allow_pos.iter().find(|tag| !is_valid_pos_tag(tag)) {
        Some(tag) => Err(TagError::Extraction(format!(
            "Invalid part-of-speech tag: {:?}",
            tag
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, GraphConfig};
    use crate::extractor::ranker::RankerKind;
    use crate::models::Keyword;
    use jieba_rs::Jieba;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    const ESSAY: &str = "我们正在建设网络安全体系。网络安全是国家安全的重要组成部分，\
        需要政府、企业和个人共同参与。互联网技术快速发展，数据保护和隐私安全成为社会关注的焦点。\
        北京和上海的企业积极推动网络技术创新，研究人员不断开发新的安全产品。\
        教育部门也在学校开展网络安全教育，帮助学生提高安全意识。";

    struct FixedRanker {
        keywords: Vec<Keyword>,
    }

    impl FixedRanker {
        fn boxed(keywords: Vec<Keyword>) -> Box<dyn KeywordRanker> {
            Box::new(Self { keywords })
        }
    }

    impl KeywordRanker for FixedRanker {
        fn kind(&self) -> RankerKind {
            RankerKind::Frequency
        }

        fn rank(&self, _text: &str, _top_k: usize, _allow_pos: &[String]) -> Result<Vec<Keyword>> {
            Ok(self.keywords.clone())
        }
    }

    struct FailingRanker;

    impl KeywordRanker for FailingRanker {
        fn kind(&self) -> RankerKind {
            RankerKind::Graph
        }

        fn rank(&self, _text: &str, _top_k: usize, _allow_pos: &[String]) -> Result<Vec<Keyword>> {
            Err(TagError::Extraction("ranker unavailable".to_string()))
        }
    }

    fn jieba_extractor() -> KeywordExtractor {
        let config = Config::default_config();
        KeywordExtractor::new(&config.segmentation, config.graph.span).unwrap()
    }

    fn assert_descending(result: &KeywordResult) {
        for pair in result.keywords().windows(2) {
            assert!(
                pair[0].weight >= pair[1].weight,
                "{} ({}) ranked above {} ({})",
                pair[0].term,
                pair[0].weight,
                pair[1].term,
                pair[1].weight
            );
        }
    }

    #[test]
    fn test_frequency_keywords_bounded_and_sorted() {
        let extractor = jieba_extractor();
        let document = Document::new("essays.txt", ESSAY.to_string());

        let result = extractor
            .extract_frequency_keywords(&document, &RankingConfig::default())
            .unwrap();

        assert!(!result.is_empty());
        assert!(result.len() <= 20);
        assert_descending(&result);
    }

    #[test]
    fn test_graph_keywords_respect_pos_filter() {
        let extractor = jieba_extractor();
        let document = Document::new("essays.txt", ESSAY.to_string());
        let options = GraphConfig::default().ranking();

        let result = extractor
            .extract_graph_keywords(&document, &options)
            .unwrap();

        assert!(result.len() <= 5);
        assert_descending(&result);

        let allowed: HashSet<&str> = ["ns", "n", "vn", "v"].into_iter().collect();
        let tagged: HashSet<(String, String)> = Jieba::new()
            .tag(ESSAY, true)
            .into_iter()
            .map(|t| (t.word.to_string(), t.tag.to_string()))
            .collect();

        for term in result.terms() {
            assert!(
                tagged
                    .iter()
                    .any(|(word, tag)| word == term && allowed.contains(tag.as_str())),
                "{term} is not tagged with an allowed part of speech"
            );
        }
    }

    #[test]
    fn test_repeated_token_ranks_first() {
        let extractor = jieba_extractor();
        let document = Document::new("essays.txt", vec!["网络"; 50].join("\n"));

        let result = extractor
            .extract_frequency_keywords(&document, &RankingConfig::default())
            .unwrap();

        assert_eq!(result.first().map(|k| k.term.as_str()), Some("网络"));
    }

    #[test]
    fn test_default_segmentation_recognises_unknown_words() {
        let extractor = jieba_extractor();
        let document = Document::new(
            "essays.txt",
            "他来到了网易杭研大厦。杭研的同事都在杭研大厦工作。".to_string(),
        );

        let result = extractor
            .extract_frequency_keywords(&document, &RankingConfig::default())
            .unwrap();

        assert_eq!(result.first().map(|k| k.term.as_str()), Some("杭研"));
    }

    #[test]
    fn test_frequency_extraction_is_idempotent() {
        let extractor = jieba_extractor();
        let document = Document::new("essays.txt", ESSAY.to_string());
        let options = RankingConfig::default();

        let first = extractor.extract_frequency_keywords(&document, &options).unwrap();
        let second = extractor.extract_frequency_keywords(&document, &options).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_blank_document_skips_ranker() {
        let extractor = KeywordExtractor::with_rankers(
            FixedRanker::boxed(vec![Keyword::new("不该出现", 1.0)]),
            Box::new(FailingRanker),
        );
        let document = Document::new("empty.txt", "  \n".to_string());

        let frequency = extractor
            .extract_frequency_keywords(&document, &RankingConfig::default())
            .unwrap();
        let graph = extractor
            .extract_graph_keywords(&document, &GraphConfig::default().ranking())
            .unwrap();

        assert!(frequency.is_empty());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_ranker_output_is_sorted_and_truncated() {
        let extractor = KeywordExtractor::with_rankers(
            FixedRanker::boxed(vec![
                Keyword::new("c", 0.2),
                Keyword::new("a", 0.9),
                Keyword::new("b", 0.5),
            ]),
            Box::new(FailingRanker),
        );
        let document = Document::new("essays.txt", "text".to_string());
        let options = RankingConfig {
            top_k: 2,
            ..Default::default()
        };

        let result = extractor.extract_frequency_keywords(&document, &options).unwrap();
        assert_eq!(result.terms().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_ranker_errors_propagate() {
        let extractor = KeywordExtractor::with_rankers(
            FixedRanker::boxed(vec![]),
            Box::new(FailingRanker),
        );
        let document = Document::new("essays.txt", "text".to_string());

        let err = extractor
            .extract_graph_keywords(&document, &GraphConfig::default().ranking())
            .unwrap_err();
        assert!(matches!(err, TagError::Extraction(_)));
    }

    #[test]
    fn test_invalid_pos_tag_rejected_before_ranking() {
        let extractor = KeywordExtractor::with_rankers(
            FixedRanker::boxed(vec![Keyword::new("a", 1.0)]),
            Box::new(FailingRanker),
        );
        let document = Document::new("essays.txt", "text".to_string());
        let options = RankingConfig {
            allow_pos: vec!["NOUN".to_string()],
            ..Default::default()
        };

        let err = extractor
            .extract_frequency_keywords(&document, &options)
            .unwrap_err();
        assert!(matches!(err, TagError::Extraction(_)));
    }
}
