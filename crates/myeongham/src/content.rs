//! The built-in resume content, one block per rendered line.

use myeongham_reveal::{Block, Segment, SegmentStyle};

/// Width of the content column, in columns.
pub const CONTENT_COLS: u16 = 72;

/// Margin columns kept clear of background glyphs on each side of the
/// column.
pub const CONTENT_PADDING: u16 = 2;

fn heading(en: &str, kr: &str) -> Block {
    Block::typed(vec![Segment::new(en, kr, SegmentStyle::Heading)])
}

fn line(en: &str, kr: &str) -> Block {
    Block::typed(vec![Segment::new(en, kr, SegmentStyle::Normal)])
}

fn detail(en: &str, kr: &str) -> Block {
    Block::typed(vec![Segment::new(en, kr, SegmentStyle::Dim)])
}

fn entry(years: &str, en: &str, kr: &str) -> Block {
    Block::typed(vec![
        Segment::fixed(years, SegmentStyle::Accent),
        Segment::new(en, kr, SegmentStyle::Normal),
    ])
}

fn link(target: &str) -> Block {
    Block::atomic(vec![Segment::fixed(target, SegmentStyle::Link)])
}

/// The full resume, in document order.
pub fn resume_blocks() -> Vec<Block> {
    vec![
        heading("KIM DOHYUN", "김도현"),
        line("Systems Engineer, Seoul", "시스템 엔지니어, 서울"),
        Block::blank(),
        detail("$ whoami", "$ whoami"),
        line(
            "I build small, reliable backend systems and the tools around",
            "작고 신뢰할 수 있는 백엔드 시스템과 그 주변 도구를 만듭니다.",
        ),
        line(
            "them, happiest close to the runtime, the profiler and the logs.",
            "런타임과 프로파일러, 로그 가까이에서 일할 때 가장 즐겁습니다.",
        ),
        Block::blank(),
        heading("EXPERIENCE", "경력"),
        entry(
            "2023-      ",
            "Backend engineer, Haneul Cloud",
            "하늘클라우드 백엔드 엔지니어",
        ),
        detail(
            "           Owns the job-scheduling service; cut p99 latency by 40%.",
            "           잡 스케줄링 서비스 담당. p99 지연을 40% 줄였습니다.",
        ),
        entry(
            "2021-2023  ",
            "Platform team, Dasom Labs",
            "다솜랩스 플랫폼 팀",
        ),
        detail(
            "           Built the internal deploy pipeline and its CLI.",
            "           사내 배포 파이프라인과 CLI를 만들었습니다.",
        ),
        entry(
            "2019-2021  ",
            "Junior developer, Narae Soft",
            "나래소프트 주니어 개발자",
        ),
        detail(
            "           Maintained a legacy billing system; automated releases.",
            "           레거시 정산 시스템 유지보수, 릴리스 자동화.",
        ),
        Block::blank(),
        heading("EDUCATION", "학력"),
        entry(
            "2015-2019  ",
            "B.S. Computer Science, Hanguk University",
            "한국대학교 컴퓨터공학 학사",
        ),
        Block::blank(),
        heading("SKILLS", "기술"),
        Block::fixed(vec![Segment::fixed(
            "[rust] [go] [postgres] [kubernetes] [grpc]",
            SegmentStyle::Tag,
        )]),
        Block::blank(),
        heading("CONTACT", "연락처"),
        link("github.com/dohyun-kim"),
        link("dohyun.kim.dev@gmail.com"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use myeongham_core::Language;
    use myeongham_reveal::BlockKind;

    #[test]
    fn test_every_segment_has_both_languages() {
        for block in resume_blocks() {
            for segment in &block.segments {
                assert!(!segment.text(Language::En).is_empty());
                assert!(!segment.text(Language::Kr).is_empty());
            }
        }
    }

    #[test]
    fn test_links_are_atomic_and_tags_static() {
        let blocks = resume_blocks();
        let atomics = blocks
            .iter()
            .filter(|b| b.kind == BlockKind::Atomic)
            .count();
        let statics = blocks
            .iter()
            .filter(|b| b.kind == BlockKind::Static)
            .count();
        assert_eq!(atomics, 2);
        assert_eq!(statics, 1);
    }

    #[test]
    fn test_lines_fit_the_content_column() {
        for block in resume_blocks() {
            for lang in [Language::En, Language::Kr] {
                assert!(block.char_len(lang) <= CONTENT_COLS as usize);
            }
        }
    }
}
