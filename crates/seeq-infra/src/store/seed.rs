//! Sample data the stores start with.

use chrono::{DateTime, TimeZone, Utc};

use seeq_core::domain::{Category, Post, Summary};

const SEED_MODEL: &str = "GPT-4.1-nano";

pub fn categories() -> Vec<Category> {
    vec![
        Category::new(1, "학습", "학습 관련 문서"),
        Category::new(2, "독서", "독서 관련 문서"),
        Category::new(3, "일상", "일상 관련 문서"),
        Category::new(4, "기타", "기타 문서"),
    ]
}

/// Three sample posts, newest first.
pub fn posts() -> Vec<Post> {
    let categories = categories();
    let category = |id: i64| {
        categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .unwrap_or_else(|| Category::new(id, "기타", "기타 문서"))
    };

    vec![
        seed_post(
            1,
            "머신러닝 기초 이론 정리",
            MACHINE_LEARNING,
            category(1),
            at(2024, 1, 15, 10, 30),
            SeedSummary {
                text: "머신러닝의 기본 개념과 지도학습, 비지도학습의 차이점을 설명합니다. 주요 알고리즘으로는 선형회귀, 의사결정트리, 클러스터링 등이 있으며, 추천 시스템, 이미지 인식, 자연어 처리 등 다양한 분야에서 활용되고 있습니다.",
                highlights: &[
                    "지도학습은 정답이 있는 데이터로 학습하는 방법",
                    "비지도학습은 패턴을 스스로 찾는 학습 방법",
                    "적절한 데이터 전처리와 모델 선택이 핵심",
                ],
                keywords: &["머신러닝", "AI", "지도학습", "비지도학습", "알고리즘"],
                confidence: 0.94,
            },
        ),
        seed_post(
            2,
            "클린 코드 독서 노트",
            CLEAN_CODE,
            category(2),
            at(2024, 1, 12, 14, 20),
            SeedSummary {
                text: "좋은 코드 작성을 위한 핵심 원칙들을 정리한 내용입니다. 의미 있는 이름 짓기, 함수는 작고 한 가지 일만 하기, 주석보다는 코드로 의도 표현하기 등의 실용적인 조언을 제공합니다.",
                highlights: &[
                    "함수는 작게 만들고 한 가지 일만 해야 함",
                    "변수와 함수는 의도를 명확히 드러내는 이름 사용",
                    "주석보다는 코드 자체로 의도를 표현하는 것이 좋음",
                ],
                keywords: &["클린코드", "리팩토링", "코드품질", "함수", "변수명"],
                confidence: 0.91,
            },
        ),
        seed_post(
            3,
            "오늘의 회의 정리",
            MEETING_NOTES,
            category(3),
            at(2024, 1, 10, 16, 45),
            SeedSummary {
                text: "Q1 프로젝트 진행 상황 점검 및 향후 계획 수립 회의 내용입니다. API 성능, 모바일 반응형, 피드백 수집 등 3가지 주요 이슈와 해결 방안을 논의했으며, 2월 5일 배포를 목표로 일정을 확정했습니다.",
                highlights: &[
                    "API 응답 속도를 2.5초에서 1초 이내로 개선 필요",
                    "2월 5일 프로덕션 배포 일정 확정",
                    "베타 테스터 그룹 구성으로 사용자 피드백 수집",
                ],
                keywords: &["프로젝트", "회의", "API최적화", "배포일정", "이슈해결"],
                confidence: 0.88,
            },
        ),
    ]
}

struct SeedSummary {
    text: &'static str,
    highlights: &'static [&'static str],
    keywords: &'static [&'static str],
    confidence: f64,
}

fn seed_post(
    id: i64,
    title: &str,
    content: &str,
    category: Category,
    created_at: DateTime<Utc>,
    summary: SeedSummary,
) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: content.to_string(),
        category,
        image_url: None,
        summary: Some(Summary {
            id,
            post_id: id,
            summary: summary.text.to_string(),
            highlights: summary.highlights.iter().map(|s| s.to_string()).collect(),
            keywords: summary.keywords.iter().map(|s| s.to_string()).collect(),
            model_version: SEED_MODEL.to_string(),
            confidence_score: summary.confidence,
            revision: 1,
            created_at,
            updated_at: created_at,
        }),
        created_at,
        updated_at: created_at,
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("seed timestamps are valid calendar dates")
}

const MACHINE_LEARNING: &str = r#"# 머신러닝 기초 이론

머신러닝(Machine Learning)은 인공지능의 한 분야로, 컴퓨터가 명시적으로 프로그래밍되지 않고도 데이터로부터 학습할 수 있게 하는 기술입니다.

## 지도학습 (Supervised Learning)

지도학습은 입력과 정답이 쌍으로 이루어진 훈련 데이터를 사용하여 모델을 학습시키는 방법입니다.

### 주요 알고리즘
- **선형회귀**: 연속적인 값을 예측
- **로지스틱회귀**: 이진 분류 문제 해결
- **의사결정트리**: 규칙 기반의 분류 및 회귀
- **랜덤포레스트**: 여러 의사결정트리의 앙상블

## 비지도학습 (Unsupervised Learning)

비지도학습은 정답 레이블이 없는 데이터에서 숨겨진 패턴이나 구조를 찾는 학습 방법입니다.

### 주요 기법
- **클러스터링**: 유사한 데이터끼리 그룹화
- **차원축소**: 고차원 데이터를 저차원으로 변환
- **연관규칙**: 데이터 간의 관계 발견

## 실제 적용 사례

1. **추천 시스템**: 넷플릭스, 아마존 등
2. **이미지 인식**: 자율주행차, 의료 진단
3. **자연어 처리**: 번역, 챗봇, 감정 분석
4. **예측 분석**: 주가 예측, 날씨 예보

적절한 데이터 전처리, 모델 선택, 그리고 성능 평가가 중요합니다."#;

const CLEAN_CODE: &str = r#"# 클린 코드 - 로버트 C. 마틴

좋은 코드를 작성하는 것은 모든 개발자가 추구해야 할 목표입니다. 클린 코드는 읽기 쉽고, 이해하기 쉬우며, 변경하기 쉬운 코드를 의미합니다.

## 의미 있는 이름

변수, 함수, 클래스의 이름은 그 존재 이유와 수행 기능, 사용 방법을 명확히 드러내야 합니다.

```javascript
const elapsedTimeInDays = 30;
```

## 함수

함수의 첫 번째 규칙은 '작게!'이고, 두 번째 규칙은 '더 작게!'입니다. 함수는 한 가지를 해야 하고, 그 한 가지를 잘 해야 하며, 그 한 가지만을 해야 합니다.

```javascript
function calculateTaxAmount(price, taxRate) {
  return price * taxRate;
}
```

## 주석

주석은 코드로 의도를 표현하지 못한 실패를 만회하기 위해 쓰는 것입니다.

## 마무리

클린 코드는 하루아침에 만들어지지 않습니다. 지속적인 연습과 리팩토링을 통해 점진적으로 개선해나가야 합니다."#;

const MEETING_NOTES: &str = r#"# Q1 프로젝트 회의 정리

**일시**: 2024년 1월 10일 오후 3시
**참석자**: 김팀장, 이개발자, 박디자이너, 최기획자

## 안건 1: 프로젝트 진행 상황 점검

- **백엔드 개발**: 70% 완료
- **프론트엔드 개발**: 85% 완료
- **디자인 시스템**: 90% 완료
- **테스팅**: 40% 완료

## 안건 2: 주요 이슈사항

### 이슈 1: API 응답 속도 개선 필요
- **현재 상황**: 평균 응답 시간 2.5초
- **목표**: 1초 이내

### 이슈 2: 모바일 반응형 디자인 수정
- 일부 화면에서 레이아웃 깨짐

### 이슈 3: 사용자 피드백 수집 방법
- 인앱 피드백 기능 추가
- 베타 테스터 그룹 구성

## 결정사항

1. **다음 회의**: 1월 17일 (수) 오후 2시
2. **배포 일정**: 2월 5일 (월) 예정
3. **추가 인력**: UI/UX 디자이너 1명 단기 지원 요청"#;
