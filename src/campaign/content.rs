//! Hand-curated content for the current newsletter issue.
//!
//! Articles are edited manually before every send, so they live here as
//! plain data rather than behind a feed or a CMS.

#[derive(Debug, Clone, serde::Serialize)]
pub struct Article {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Section {
    pub title: &'static str,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct MainFeature {
    pub headline: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone)]
pub struct Issue {
    pub edition: &'static str,
    pub main_feature: MainFeature,
    pub sections: Vec<Section>,
}

impl Issue {
    pub fn article_count(&self) -> usize {
        self.sections.iter().map(|s| s.articles.len()).sum()
    }
}

pub fn current_issue() -> Issue {
    let regulatory_updates = Section {
        title: "Regulatory Updates",
        articles: vec![
            Article {
                title: "High Court seeks J&K Govt & FSSAI response on PIL",
                description: "The J&K High Court has sought responses on a PIL over the largest rotten meat scandal involving a seizure of 11,000 Kgs of rotten meat. Meanwhile, the state ordered strict FSSAI compliance and warned of heavy penalties for violators.",
                url: "https://www.crosstownnews.in/post/145643/high-court-seeks-jk-govt-fssai%E2%80%99s-response-on-pil-in-4-days-over-rotten-meat-issue.html",
            },
            Article {
                title: "FSSAI amends labelling rules for coffee-chicory mixtures",
                description: "The regulator clarified blend declarations and labelling rules to improve consumer understanding.",
                url: "https://www.legalitysimplified.com/fssai-amends-labelling-regulations-for-coffee-chicory-mixtures/",
            },
            Article {
                title: "Bottled water: pre-licence inspections & standards",
                description: "New guidelines explain inspection steps and standards required before bottled-water licences are issued.",
                url: "https://www.livemint.com/news/india/food-safety-bottled-water-fssai-regulations-india-pre-licence-inspections-safety-standards-11755660019082.html",
            },
        ],
    };

    let industry_updates = Section {
        title: "Industry Updates",
        articles: vec![
            Article {
                title: "FSSAI suspends AR Dairy licence over ghee adulteration",
                description: "The licence was revoked after officials found ghee adulteration and mislabelling.",
                url: "https://www.livemint.com/news/fssai-suspends-ar-dairy-licence-ghee-adulteration-false-information-11755422633259.html",
            },
            Article {
                title: "Kerala seizes 17,000 litres of adulterated coconut oil",
                description: "Officials uncovered a large adulteration racket in Thiruvananthapuram, protecting public health.",
                url: "https://www.newindianexpress.com/cities/thiruvananthapuram/2025/Aug/20/17k-litres-of-adulterated-coconut-oil-seized",
            },
            Article {
                title: "6,500 kg adulterated ghee seized in Rajkot",
                description: "A major seizure in Rajkot highlights ongoing enforcement against dairy adulteration.",
                url: "https://www.zeebiz.com/india/news-fssai-seizes-6500-kg-adulterated-ghee-worth-rs-35-lakh-from-rajkot-dairy-376973",
            },
            Article {
                title: "1,500 street-food poisoning cases at Pune in 6 months",
                description: "Poor hygiene at city stalls has caused widespread food-borne illnesses, mostly among students.",
                url: "https://punemirror.com/city/pune/punes-street-food-crisis-1500-poisoning-cases-in-six-months-students-worst-hit/",
            },
        ],
    };

    let international_updates = Section {
        title: "International Updates",
        articles: vec![
            Article {
                title: "Walmart recalls frozen shrimp over possible Cesium 137 contamination",
                description: "The FDA flagged risks in Indonesian-sourced shrimp, prompting a nationwide recall.",
                url: "https://www.theguardian.com/business/2025/aug/20/walmart-radioactive-shrimp-recall",
            },
            Article {
                title: "UK FSA: antibiotic-resistant Listeria & E. coli in salmon fillets",
                description: "Low but detectable levels of resistant bacteria were found in salmon, underlining AMR risks.",
                url: "https://www.food-safety.com/articles/10632-uk-fsa-reports-low-levels-of-antibiotic-resistant-listeria-e-coli-in-salmon-filets",
            },
            Article {
                title: "US FDA weighs higher orange-juice sugar limits to aid growers",
                description: "Regulators are considering easing sugar standards to support the citrus industry.",
                url: "https://www.foxnews.com/food-drink/orange-juice-sugar-cuts-proposed-fda-help-citrus-growers-what-means-you",
            },
        ],
    };

    let best_practices = Section {
        title: "Food & Nutrition Best Practices",
        articles: vec![
            Article {
                title: "FSSAI and Danone India launch 'Mauli', an all-women Clean Street Food Hub",
                description: "The project demonstrates a replicable women-led hygiene model for safe street-food vending.",
                url: "https://www.storyboard18.com/brand-marketing/danone-india-and-fssai-launch-mauli-an-all-women-clean-street-food-hub-79035.htm",
            },
            Article {
                title: "FSSAI's scale plan: train 2.5 million food handlers",
                description: "The roadmap calls for nationwide training and stronger coordination to improve food safety.",
                url: "https://etedge-insights.com/sdgs-and-esg/sustainability/serving-safety-at-scale-fssais-vision-to-transform-what-india-eats/",
            },
            Article {
                title: "UPF overconsumption driven by perception: study",
                description: "Research shows consumer perceptions strongly influence overconsumption of ultra-processed foods.",
                url: "https://www.foodnavigator.com/Article/2025/08/20/upf-overconsumption-due-to-perception-study-claims/",
            },
        ],
    };

    Issue {
        edition: "Volume 1: Week 4 (Aug 16 - 22, 2025)",
        main_feature: MainFeature {
            headline: "How AI is <span style=\"color: #2CC3DA;\">Transforming</span> Food Safety",
            summary: "A pivotal week for food safety: India sharpened enforcement after the J&K rotten meat scandal, with new state orders, court scrutiny, and FSSAI updates on coffee-chicory labeling and bottled-water norms. Major seizures in Kerala and Gujarat underscored rising vigilance. Globally, Walmart recalled frozen shrimp over radiation fears, the UK flagged antimicrobial resistance in salmon, and the US reviewed orange-juice standards.",
        },
        sections: vec![
            regulatory_updates,
            industry_updates,
            international_updates,
            best_practices,
        ],
    }
}
