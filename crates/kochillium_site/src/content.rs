// SPDX-License-Identifier: MIT OR Apache-2.0
//! Static site content: portfolio works and profile data.

use serde::{Deserialize, Serialize};

/// Contact address shown on the site
pub const CONTACT_EMAIL: &str = "hello@kochillium.writer";

/// Brand name
pub const BRAND: &str = "Ko-ChilLium";

/// Portfolio category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkCategory {
    /// Blog series
    Blog,
    /// Search-driven articles
    Seo,
    /// Sales and product copy
    Copywriting,
    /// Content planning engagements
    ContentStrategy,
}

impl WorkCategory {
    /// Every category in filter order
    pub fn all() -> &'static [WorkCategory] {
        &[
            WorkCategory::Blog,
            WorkCategory::Seo,
            WorkCategory::Copywriting,
            WorkCategory::ContentStrategy,
        ]
    }

    /// Label used on filter buttons and cards
    pub fn label(&self) -> &'static str {
        match self {
            WorkCategory::Blog => "BLOG",
            WorkCategory::Seo => "SEO",
            WorkCategory::Copywriting => "COPYWRITING",
            WorkCategory::ContentStrategy => "CONTENT STRATEGY",
        }
    }
}

/// Gallery filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show everything
    #[default]
    All,
    /// Show a single category
    Only(WorkCategory),
}

impl CategoryFilter {
    /// Filter buttons in display order
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(WorkCategory::all().iter().copied().map(CategoryFilter::Only))
            .collect()
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "ALL",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Whether a work passes this filter
    pub fn matches(&self, work: &Work) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => work.category == *category,
        }
    }
}

/// A portfolio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    /// Project title
    pub title: String,
    /// Gallery category
    pub category: WorkCategory,
    /// Year delivered
    pub year: u16,
    /// Client name
    pub client: String,
    /// Project summary
    pub description: String,
    /// Cover image URL
    pub image: String,
    /// Topic tags
    pub tags: Vec<String>,
    /// Headline result
    pub metrics: String,
}

impl Work {
    fn new(
        title: &str,
        category: WorkCategory,
        year: u16,
        client: &str,
        description: &str,
        image: &str,
        tags: &[&str],
        metrics: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            category,
            year,
            client: client.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            metrics: metrics.to_string(),
        }
    }
}

/// The portfolio catalog, newest first
pub fn works() -> Vec<Work> {
    use WorkCategory::*;
    vec![
        Work::new(
            "Tech Startup Blog Series",
            Blog,
            2024,
            "TechFlow Inc.",
            "スタートアップ企業のテクノロジーブログシリーズを執筆。AI、ブロックチェーン、IoTなどの最新技術トレンドを分かりやすく解説し、月間PV数を50万から150万に向上させました。",
            "https://images.pexels.com/photos/7688336/pexels-photo-7688336.jpeg?auto=compress&cs=tinysrgb&w=800",
            &["Technology", "B2B", "Long-form"],
            "PV数3倍向上",
        ),
        Work::new(
            "E-commerce Product Copy",
            Copywriting,
            2024,
            "Fashion Forward",
            "ファッションECサイトの商品説明文を全面リニューアル。ブランドの世界観を表現しながら購買欲を喚起するコピーライティングを実施し、コンバージョン率を大幅に改善しました。",
            "https://images.pexels.com/photos/7092613/pexels-photo-7092613.jpeg?auto=compress&cs=tinysrgb&w=800",
            &["Fashion", "E-commerce", "Conversion"],
            "CVR 25%向上",
        ),
        Work::new(
            "SEO Content Strategy",
            Seo,
            2024,
            "CloudTools Pro",
            "SaaSツールのSEOコンテンツ戦略を策定・執筆。競合分析から始まり、検索意図に合わせた記事設計により、複数のビッグキーワードで検索順位1位を獲得しました。",
            "https://images.pexels.com/photos/6476808/pexels-photo-6476808.jpeg?auto=compress&cs=tinysrgb&w=800",
            &["SaaS", "SEO", "Strategy"],
            "オーガニック流入200%向上",
        ),
        Work::new(
            "Healthcare Content Series",
            ContentStrategy,
            2023,
            "Medical Insights",
            "医療従事者向けの専門コンテンツシリーズを企画・執筆。複雑な医療情報を正確かつ分かりやすく伝え、業界内での信頼性とブランド認知度を向上させました。",
            "https://images.pexels.com/photos/4386321/pexels-photo-4386321.jpeg?auto=compress&cs=tinysrgb&w=800",
            &["Healthcare", "B2B", "Expert"],
            "専門家からの引用増加",
        ),
        Work::new(
            "Lifestyle Brand Storytelling",
            Blog,
            2023,
            "Minimalist Living",
            "ライフスタイルブランドのストーリーテリングコンテンツを制作。ブランドの価値観とユーザーの感情を結びつける記事により、エンゲージメント率を劇的に向上させました。",
            "https://images.pexels.com/photos/6585757/pexels-photo-6585757.jpeg?auto=compress&cs=tinysrgb&w=800",
            &["Lifestyle", "Storytelling", "Brand"],
            "エンゲージメント率180%向上",
        ),
        Work::new(
            "B2B Lead Generation Content",
            ContentStrategy,
            2023,
            "Enterprise Solutions",
            "B2B企業のリードジェネレーションを目的としたコンテンツマーケティング戦略を実施。ホワイトペーパーやケーススタディの制作により、質の高いリードを獲得しました。",
            "https://images.pexels.com/photos/7688115/pexels-photo-7688115.jpeg?auto=compress&cs=tinysrgb&w=800",
            &["B2B", "Lead Gen", "Whitepaper"],
            "リード獲得数150%向上",
        ),
    ]
}

/// Works passing `filter`, catalog order preserved
pub fn filtered_works(catalog: &[Work], filter: CategoryFilter) -> Vec<&Work> {
    catalog.iter().filter(|work| filter.matches(work)).collect()
}

/// A headline number on the about page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    /// What is counted
    pub label: &'static str,
    /// Headline figure
    pub value: &'static str,
}

/// Writer profile
pub mod profile {
    use super::Achievement;

    /// Signature name
    pub const PEN_NAME: &str = "pinyonScript";

    /// Profile text
    pub const BIO: &str = "フリーランスのウェブライターとして5年間活動。企業のオウンドメディア運営からSEOコンテンツ制作、コピーライティングまで幅広く手がけています。特にBtoB領域での専門性が高く、複雑なビジネス課題を分かりやすく伝えるコンテンツ制作を得意としています。";

    /// Career timeline
    pub const CAREER: &[&str] = &[
        "2019年 - 大手広告代理店にてコピーライター",
        "2021年 - フリーランスとして独立",
        "2022年 - SEOコンテンツ専門チーム設立",
        "2024年 - 企業向けコンテンツ戦略コンサルティング開始",
    ];

    /// Headline numbers
    pub const ACHIEVEMENTS: &[Achievement] = &[
        Achievement { label: "執筆記事数", value: "500+" },
        Achievement { label: "クライアント数", value: "50+" },
        Achievement { label: "SEO1位獲得", value: "100+" },
        Achievement { label: "継続率", value: "95%" },
    ];

    /// Skill tags
    pub const SKILLS: &[&str] = &[
        "SEOライティング",
        "コピーライティング",
        "コンテンツ戦略",
        "ブログ執筆",
        "プレスリリース",
        "SNSコンテンツ",
        "メルマガ執筆",
        "ホワイトペーパー",
    ];

    /// Writing philosophy
    pub const PHILOSOPHY: &str = "「文章は読者との対話である」という信念のもと、常に読み手の立場に立ったコンテンツ制作を心がけています。複雑な情報を分かりやすく伝え、読者の課題解決に貢献することが私の使命です。データに基づいた戦略的なアプローチと、人の心に響く表現力を組み合わせることで、クライアントのビジネス成長に寄与するコンテンツを生み出しています。";

    /// Services listed next to the contact form
    pub const SERVICES: &[&str] = &[
        "ブログ記事・コラム執筆",
        "SEO記事制作",
        "コピーライティング",
        "プレスリリース",
        "メルマガ・SNSコンテンツ",
        "コンテンツ戦略立案",
    ];
}
