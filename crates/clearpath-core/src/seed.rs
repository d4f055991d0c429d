//! Seed data the stores initialize from on load
//!
//! All of this is mock content; there is no backing service. Ids are fixed
//! strings so pages and tests can reference entries directly.

use chrono::{DateTime, TimeZone, Utc};
use shared_types::{
    Article, Case, CaseNote, CasePriority, CaseStatus, Milestone, PlanTier, TimelineEvent,
    UserProfile,
};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn seed_profile() -> UserProfile {
    UserProfile {
        id: "user-1".to_string(),
        name: "Maria Gonzalez".to_string(),
        email: "maria.gonzalez@example.com".to_string(),
        country_of_origin: "Mexico".to_string(),
        immigration_status: "H-1B, Adjustment of Status pending".to_string(),
    }
}

pub fn seed_plan() -> PlanTier {
    PlanTier::Free
}

pub fn seed_cases() -> Vec<Case> {
    vec![
        Case {
            id: "case-1".to_string(),
            case_number: "MSC2490012345".to_string(),
            case_type: "I-485 Adjustment of Status".to_string(),
            status: CaseStatus::Interview,
            priority: CasePriority::High,
            submitted_date: day(2024, 8, 12),
            last_updated: day(2025, 1, 20),
            estimated_completion: day(2025, 6, 30),
            milestones: vec![
                Milestone {
                    id: "case-1-m1".to_string(),
                    name: "Case Received".to_string(),
                    date: Some(day(2024, 8, 12)),
                    completed: true,
                    active: false,
                },
                Milestone {
                    id: "case-1-m2".to_string(),
                    name: "Biometrics Completed".to_string(),
                    date: Some(day(2024, 9, 30)),
                    completed: true,
                    active: false,
                },
                Milestone {
                    id: "case-1-m3".to_string(),
                    name: "Interview Scheduled".to_string(),
                    date: Some(day(2025, 3, 15)),
                    completed: false,
                    active: true,
                },
                Milestone {
                    id: "case-1-m4".to_string(),
                    name: "Decision".to_string(),
                    date: None,
                    completed: false,
                    active: false,
                },
            ],
            notes: vec![CaseNote {
                id: "case-1-n1".to_string(),
                content: "Bring original marriage certificate to the interview.".to_string(),
                created_at: day(2025, 1, 20),
            }],
            timeline: vec![
                TimelineEvent {
                    id: "case-1-t1".to_string(),
                    event_type: "filing".to_string(),
                    description: "I-485 package received by USCIS".to_string(),
                    date: day(2024, 8, 12),
                },
                TimelineEvent {
                    id: "case-1-t2".to_string(),
                    event_type: "biometrics".to_string(),
                    description: "Biometrics appointment completed".to_string(),
                    date: day(2024, 9, 30),
                },
                TimelineEvent {
                    id: "case-1-t3".to_string(),
                    event_type: "status_change".to_string(),
                    description: "Interview notice issued".to_string(),
                    date: day(2025, 1, 20),
                },
            ],
        },
        Case {
            id: "case-2".to_string(),
            case_number: "IOE9087654321".to_string(),
            case_type: "I-130 Petition for Alien Relative".to_string(),
            status: CaseStatus::Pending,
            priority: CasePriority::Normal,
            submitted_date: day(2024, 11, 3),
            last_updated: day(2024, 12, 1),
            estimated_completion: day(2025, 10, 15),
            milestones: vec![
                Milestone {
                    id: "case-2-m1".to_string(),
                    name: "Case Received".to_string(),
                    date: Some(day(2024, 11, 3)),
                    completed: true,
                    active: false,
                },
                Milestone {
                    id: "case-2-m2".to_string(),
                    name: "Initial Review".to_string(),
                    date: Some(day(2025, 2, 10)),
                    completed: false,
                    active: true,
                },
                Milestone {
                    id: "case-2-m3".to_string(),
                    name: "Decision".to_string(),
                    date: None,
                    completed: false,
                    active: false,
                },
            ],
            notes: vec![],
            timeline: vec![TimelineEvent {
                id: "case-2-t1".to_string(),
                event_type: "filing".to_string(),
                description: "I-130 petition received by USCIS".to_string(),
                date: day(2024, 11, 3),
            }],
        },
    ]
}

pub fn seed_attorneys() -> Vec<shared_types::Attorney> {
    use shared_types::Attorney;

    let attorney = |id: &str,
                    name: &str,
                    title: &str,
                    rating: f64,
                    reviews: u32,
                    specialties: &[&str],
                    location: &str,
                    experience_years: u32,
                    hourly_rate: u32,
                    featured: bool,
                    bio: &str,
                    education: &str,
                    bar_number: &str,
                    cases_won: u32,
                    response_time: &str,
                    languages: &[&str],
                    video_consult: bool| Attorney {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        rating,
        reviews,
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        location: location.to_string(),
        experience_years,
        hourly_rate,
        featured,
        bio: bio.to_string(),
        education: education.to_string(),
        bar_number: bar_number.to_string(),
        cases_won,
        response_time: response_time.to_string(),
        languages: languages.iter().map(|s| s.to_string()).collect(),
        video_consult,
    };

    vec![
        attorney(
            "A1",
            "Sarah Chen",
            "Managing Partner",
            4.9,
            312,
            &["Family-Based Immigration", "Adjustment of Status"],
            "New York, NY",
            18,
            350,
            true,
            "Former USCIS adjudicator focusing on complex family petitions.",
            "Columbia Law School, JD",
            "NY-4821093",
            940,
            "within 2 hours",
            &["English", "Mandarin"],
            true,
        ),
        attorney(
            "A2",
            "James Okafor",
            "Senior Attorney",
            4.8,
            228,
            &["Employment-Based Immigration", "PERM Labor Certification"],
            "San Francisco, CA",
            14,
            320,
            true,
            "Represents startups and engineers through H-1B and EB-2 NIW filings.",
            "Stanford Law School, JD",
            "CA-2290471",
            710,
            "within 4 hours",
            &["English"],
            true,
        ),
        attorney(
            "A3",
            "Ana Morales",
            "Partner",
            4.9,
            187,
            &["Asylum", "Removal Defense"],
            "Houston, TX",
            16,
            275,
            false,
            "Two decades of humanitarian and defensive asylum practice.",
            "University of Texas School of Law, JD",
            "TX-8834412",
            520,
            "same day",
            &["English", "Spanish"],
            true,
        ),
        attorney(
            "A4",
            "David Kim",
            "Associate Attorney",
            4.6,
            94,
            &["Naturalization", "Family-Based Immigration"],
            "Chicago, IL",
            7,
            195,
            false,
            "Guides clients through N-400 naturalization and consular processing.",
            "Northwestern Pritzker School of Law, JD",
            "IL-6671203",
            260,
            "within 24 hours",
            &["English", "Korean"],
            false,
        ),
        attorney(
            "A5",
            "Priya Raman",
            "Of Counsel",
            4.7,
            156,
            &["Employment-Based Immigration", "Investor Visas"],
            "Austin, TX",
            12,
            290,
            false,
            "EB-5 and E-2 investor practice with a prior corporate law background.",
            "Georgetown University Law Center, JD",
            "TX-5527819",
            430,
            "within 4 hours",
            &["English", "Tamil", "Hindi"],
            true,
        ),
        attorney(
            "A6",
            "Elena Petrova",
            "Senior Attorney",
            4.8,
            201,
            &["Asylum", "Family-Based Immigration", "Naturalization"],
            "New York, NY",
            15,
            310,
            true,
            "Handles layered cases combining asylum claims with family petitions.",
            "NYU School of Law, JD",
            "NY-3310567",
            680,
            "within 2 hours",
            &["English", "Russian", "Ukrainian"],
            true,
        ),
    ]
}

pub fn seed_articles() -> Vec<Article> {
    let article = |id: &str,
                   title: &str,
                   excerpt: &str,
                   content: &str,
                   category: &str,
                   tags: &[&str],
                   read_time_minutes: u32,
                   views: u64,
                   helpful: u32,
                   not_helpful: u32,
                   updated: DateTime<Utc>| Article {
        id: id.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        read_time_minutes,
        views,
        helpful,
        not_helpful,
        last_updated: updated,
    };

    vec![
        article(
            "art-1",
            "Green Card Through Marriage: Complete Timeline",
            "What to expect at every stage of a marriage-based adjustment case.",
            "From filing the I-130 and I-485 together through biometrics, work \
             authorization, the interview, and the decision, this guide walks the \
             full marriage-based green card timeline and the evidence officers \
             expect at each step.",
            "Family Immigration",
            &["green card", "marriage", "I-485", "timeline"],
            12,
            18452,
            1203,
            41,
            day(2025, 1, 18),
        ),
        article(
            "art-2",
            "Responding to a Request for Evidence (RFE)",
            "How to read an RFE notice and build a complete, on-time response.",
            "An RFE is not a denial. This article breaks down the anatomy of an \
             RFE notice, the single-response rule, deadline math, and how to \
             assemble exhibits that directly answer each listed deficiency.",
            "Case Process",
            &["RFE", "evidence", "USCIS"],
            9,
            15210,
            987,
            35,
            day(2025, 1, 25),
        ),
        article(
            "art-3",
            "H-1B to Green Card: Employment-Based Paths",
            "PERM, EB-2, EB-3, and NIW options for workers in H-1B status.",
            "Most H-1B holders reach permanent residence through PERM labor \
             certification followed by an I-140 and adjustment. This article \
             compares processing realities across EB-2, EB-3, and the \
             self-petitioned National Interest Waiver.",
            "Employment Immigration",
            &["H-1B", "PERM", "EB-2", "green card"],
            14,
            12875,
            845,
            52,
            day(2024, 12, 10),
        ),
        article(
            "art-4",
            "Preparing for Your Naturalization Interview",
            "The civics test, English test, and file review, demystified.",
            "The N-400 interview covers your application line by line plus the \
             civics and English tests. Learn what officers verify, which \
             documents to bring, and how continuances and retests work.",
            "Citizenship",
            &["naturalization", "N-400", "interview", "civics test"],
            10,
            11034,
            932,
            18,
            day(2025, 2, 2),
        ),
        article(
            "art-5",
            "Asylum Eligibility: The Five Protected Grounds",
            "Race, religion, nationality, political opinion, and social group.",
            "Asylum requires persecution on account of a protected ground. This \
             overview explains nexus, the one-year filing deadline and its \
             exceptions, and the difference between affirmative and defensive \
             filings.",
            "Humanitarian",
            &["asylum", "protected grounds", "one-year deadline"],
            11,
            9462,
            611,
            27,
            day(2024, 11, 21),
        ),
        article(
            "art-6",
            "Travel While Your Adjustment Case Is Pending",
            "Advance parole rules and the risks of leaving without it.",
            "Departing the U.S. with a pending I-485 and no advance parole \
             abandons the application in most cases. This article covers I-131 \
             timing, emergency parole, and how H and L visa holders differ.",
            "Case Process",
            &["advance parole", "travel", "I-131", "I-485"],
            7,
            8120,
            540,
            22,
            day(2025, 1, 5),
        ),
        article(
            "art-7",
            "Understanding USCIS Processing Times",
            "How posted ranges are computed and when an inquiry is allowed.",
            "Posted processing times reflect completed cases, not your place in \
             line. Learn how the 80th-percentile figure works, when a case is \
             'outside normal processing', and what a service request can do.",
            "Case Process",
            &["processing times", "USCIS", "case inquiry"],
            6,
            7384,
            423,
            31,
            day(2024, 10, 14),
        ),
        article(
            "art-8",
            "Work Authorization Categories Explained",
            "Which EAD category applies to you and how renewals work.",
            "From (c)(9) adjustment applicants to (a)(5) asylees, EAD categories \
             drive eligibility, fees, and automatic-extension rules. This guide \
             maps the common categories and their renewal windows.",
            "Employment Immigration",
            &["EAD", "work permit", "I-765"],
            8,
            6902,
            388,
            19,
            day(2024, 12, 28),
        ),
    ]
}
