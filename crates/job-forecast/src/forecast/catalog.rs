use std::collections::HashMap;
use std::sync::OnceLock;

use super::domain::{EducationPathway, Industry, PathwayFormat, PathwayKind, SalaryBand};

/// Reference metrics for one job title within an industry.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub job_title: &'static str,
    pub base_demand: u8,
    /// Annual growth percentages for year one and year two before experience scaling.
    pub growth_range: (u8, u8),
    pub salary: SalaryBand,
    pub skills: Vec<&'static str>,
    pub education_pathways: Vec<EducationPathway>,
}

/// Read-only lookup of job titles per industry, built once per process.
#[derive(Debug)]
pub struct Catalog {
    industries: HashMap<Industry, Vec<CatalogEntry>>,
}

impl Catalog {
    pub fn standard() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog {
            industries: standard_entries().into_iter().collect(),
        })
    }

    /// Rows for the industry in catalog order; empty for industries without reference data.
    pub fn entries_for(&self, industry: Industry) -> &[CatalogEntry] {
        self.industries
            .get(&industry)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn job_count(&self, industry: Industry) -> usize {
        self.entries_for(industry).len()
    }

    pub fn industry_salary_base(industry: Industry) -> SalaryBand {
        match industry {
            Industry::Technology => SalaryBand { min: 70_000, max: 120_000 },
            Industry::Healthcare => SalaryBand { min: 50_000, max: 90_000 },
            Industry::Finance => SalaryBand { min: 60_000, max: 110_000 },
            Industry::Education => SalaryBand { min: 40_000, max: 70_000 },
            Industry::Manufacturing => SalaryBand { min: 55_000, max: 95_000 },
            Industry::Retail => SalaryBand { min: 35_000, max: 80_000 },
            Industry::Energy => SalaryBand { min: 65_000, max: 115_000 },
            Industry::Entertainment => SalaryBand { min: 40_000, max: 85_000 },
            Industry::Telecommunications => SalaryBand { min: 60_000, max: 105_000 },
            Industry::Transportation => SalaryBand { min: 45_000, max: 85_000 },
        }
    }
}

fn standard_entries() -> Vec<(Industry, Vec<CatalogEntry>)> {
    vec![
        (Industry::Technology, technology_entries()),
        (Industry::Healthcare, healthcare_entries()),
        (Industry::Finance, finance_entries()),
        (Industry::Education, education_entries()),
        (Industry::Manufacturing, manufacturing_entries()),
        (Industry::Retail, retail_entries()),
        (Industry::Energy, energy_entries()),
        (Industry::Entertainment, entertainment_entries()),
        (Industry::Telecommunications, telecommunications_entries()),
        (Industry::Transportation, transportation_entries()),
    ]
}

fn technology_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            job_title: "Software Engineer",
            base_demand: 85,
            growth_range: (12, 18),
            salary: SalaryBand { min: 80_000, max: 150_000 },
            skills: vec![
                "JavaScript",
                "React",
                "Node.js",
                "Python",
                "Git",
                "Agile",
                "REST APIs",
                "Database Design",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Full Stack Web Development",
                    kind: PathwayKind::Bootcamp,
                    institution: "Tech Academy",
                    duration: "6 months",
                    format: PathwayFormat::Hybrid,
                    description: "Comprehensive full-stack development program covering modern web technologies.",
                    cost: "$12,000 - $18,000",
                    alignment_score: 95,
                    skills: vec!["JavaScript", "React", "Node.js", "MongoDB", "Git"],
                },
                EducationPathway {
                    title: "Computer Science Degree",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "4 years",
                    format: PathwayFormat::InPerson,
                    description: "Bachelor's degree in Computer Science with focus on software engineering.",
                    cost: "$40,000 - $80,000",
                    alignment_score: 98,
                    skills: vec![
                        "Algorithms",
                        "Data Structures",
                        "Software Architecture",
                        "Programming Languages",
                    ],
                },
                EducationPathway {
                    title: "AWS Certified Developer",
                    kind: PathwayKind::Certification,
                    institution: "Amazon Web Services",
                    duration: "3-6 months",
                    format: PathwayFormat::Online,
                    description: "Industry-recognized certification for cloud development skills.",
                    cost: "$300 - $500",
                    alignment_score: 88,
                    skills: vec!["AWS", "Cloud Computing", "Lambda", "DynamoDB"],
                },
            ],
        },
        CatalogEntry {
            job_title: "Data Scientist",
            base_demand: 78,
            growth_range: (15, 22),
            salary: SalaryBand { min: 90_000, max: 160_000 },
            skills: vec![
                "Python",
                "R",
                "Machine Learning",
                "SQL",
                "Statistics",
                "Pandas",
                "Scikit-learn",
                "Data Visualization",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Data Science Master's Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "2 years",
                    format: PathwayFormat::Online,
                    description: "Advanced degree focusing on statistical analysis and machine learning.",
                    cost: "$30,000 - $60,000",
                    alignment_score: 96,
                    skills: vec![
                        "Advanced Statistics",
                        "Machine Learning",
                        "Deep Learning",
                        "Research Methods",
                    ],
                },
                EducationPathway {
                    title: "Google Data Analytics Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Google",
                    duration: "6 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering data analysis fundamentals.",
                    cost: "$300 - $500",
                    alignment_score: 85,
                    skills: vec!["Data Analysis", "SQL", "Tableau", "R Programming"],
                },
                EducationPathway {
                    title: "Machine Learning Specialization",
                    kind: PathwayKind::Course,
                    institution: "Coursera",
                    duration: "4-6 months",
                    format: PathwayFormat::Online,
                    description: "Comprehensive ML course by Stanford University.",
                    cost: "$500 - $1,000",
                    alignment_score: 92,
                    skills: vec!["Machine Learning", "Python", "TensorFlow", "Neural Networks"],
                },
            ],
        },
        CatalogEntry {
            job_title: "DevOps Engineer",
            base_demand: 72,
            growth_range: (18, 25),
            salary: SalaryBand { min: 85_000, max: 145_000 },
            skills: vec![
                "Docker",
                "Kubernetes",
                "AWS",
                "Jenkins",
                "Terraform",
                "Linux",
                "CI/CD",
                "Monitoring",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "AWS DevOps Engineer Professional",
                    kind: PathwayKind::Certification,
                    institution: "Amazon Web Services",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional-level certification for DevOps practices on AWS.",
                    cost: "$300 - $500",
                    alignment_score: 94,
                    skills: vec!["AWS", "CI/CD", "Infrastructure as Code", "Monitoring"],
                },
                EducationPathway {
                    title: "Kubernetes Administrator (CKA)",
                    kind: PathwayKind::Certification,
                    institution: "Cloud Native Computing Foundation",
                    duration: "3-6 months",
                    format: PathwayFormat::Online,
                    description: "Hands-on certification for Kubernetes administration.",
                    cost: "$300 - $400",
                    alignment_score: 91,
                    skills: vec!["Kubernetes", "Container Orchestration", "Cluster Management"],
                },
            ],
        },
        CatalogEntry {
            job_title: "AI/ML Engineer",
            base_demand: 68,
            growth_range: (25, 35),
            salary: SalaryBand { min: 100_000, max: 180_000 },
            skills: vec![
                "Python",
                "TensorFlow",
                "PyTorch",
                "Deep Learning",
                "NLP",
                "Computer Vision",
                "MLOps",
                "Statistics",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "AI Engineering Master's",
                    kind: PathwayKind::Degree,
                    institution: "Stanford University",
                    duration: "2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Advanced degree in artificial intelligence and machine learning engineering.",
                    cost: "$60,000 - $120,000",
                    alignment_score: 98,
                    skills: vec![
                        "Deep Learning",
                        "Neural Networks",
                        "AI Research",
                        "Advanced Mathematics",
                    ],
                },
                EducationPathway {
                    title: "TensorFlow Developer Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Google",
                    duration: "3-6 months",
                    format: PathwayFormat::Online,
                    description: "Professional certification for TensorFlow development skills.",
                    cost: "$100 - $200",
                    alignment_score: 89,
                    skills: vec![
                        "TensorFlow",
                        "Deep Learning",
                        "Neural Networks",
                        "Model Deployment",
                    ],
                },
            ],
        },
        CatalogEntry {
            job_title: "Cybersecurity Analyst",
            base_demand: 75,
            growth_range: (20, 28),
            salary: SalaryBand { min: 75_000, max: 140_000 },
            skills: vec![
                "Network Security",
                "Penetration Testing",
                "SIEM",
                "Incident Response",
                "Risk Assessment",
                "Compliance",
                "Ethical Hacking",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "CISSP Certification",
                    kind: PathwayKind::Certification,
                    institution: "(ISC)² International",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Gold standard certification for cybersecurity professionals.",
                    cost: "$700 - $1,000",
                    alignment_score: 96,
                    skills: vec![
                        "Security Architecture",
                        "Risk Management",
                        "Compliance",
                        "Incident Response",
                    ],
                },
                EducationPathway {
                    title: "Cybersecurity Bootcamp",
                    kind: PathwayKind::Bootcamp,
                    institution: "Cybersecurity Institute",
                    duration: "6 months",
                    format: PathwayFormat::Hybrid,
                    description: "Intensive program covering all aspects of cybersecurity.",
                    cost: "$15,000 - $20,000",
                    alignment_score: 93,
                    skills: vec![
                        "Penetration Testing",
                        "Network Security",
                        "Digital Forensics",
                        "Ethical Hacking",
                    ],
                },
            ],
        },
    ]
}

fn healthcare_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            job_title: "Registered Nurse",
            base_demand: 88,
            growth_range: (8, 12),
            salary: SalaryBand { min: 60_000, max: 85_000 },
            skills: vec![
                "Patient Care",
                "Medical Knowledge",
                "Communication",
                "Critical Thinking",
                "EMR Systems",
                "Medication Administration",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Bachelor of Science in Nursing",
                    kind: PathwayKind::Degree,
                    institution: "Nursing School",
                    duration: "4 years",
                    format: PathwayFormat::InPerson,
                    description: "Comprehensive nursing education with clinical experience.",
                    cost: "$40,000 - $80,000",
                    alignment_score: 98,
                    skills: vec![
                        "Clinical Skills",
                        "Patient Assessment",
                        "Pharmacology",
                        "Nursing Ethics",
                    ],
                },
            ],
        },
        CatalogEntry {
            job_title: "Physical Therapist",
            base_demand: 82,
            growth_range: (12, 18),
            salary: SalaryBand { min: 70_000, max: 95_000 },
            skills: vec![
                "Anatomy",
                "Rehabilitation",
                "Patient Assessment",
                "Treatment Planning",
                "Manual Therapy",
                "Exercise Prescription",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Doctor of Physical Therapy",
                    kind: PathwayKind::Degree,
                    institution: "PT School",
                    duration: "3 years",
                    format: PathwayFormat::InPerson,
                    description: "Professional doctorate in physical therapy.",
                    cost: "$80,000 - $150,000",
                    alignment_score: 98,
                    skills: vec![
                        "Clinical Assessment",
                        "Treatment Techniques",
                        "Patient Education",
                        "Research Methods",
                    ],
                },
            ],
        },
        CatalogEntry {
            job_title: "Medical Technologist",
            base_demand: 76,
            growth_range: (10, 15),
            salary: SalaryBand { min: 55_000, max: 75_000 },
            skills: vec![
                "Laboratory Testing",
                "Quality Control",
                "Medical Equipment",
                "Data Analysis",
                "Safety Protocols",
                "Microscopy",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Medical Laboratory Science Degree",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "4 years",
                    format: PathwayFormat::InPerson,
                    description: "Bachelor's degree in medical laboratory science.",
                    cost: "$40,000 - $70,000",
                    alignment_score: 96,
                    skills: vec!["Clinical Chemistry", "Microbiology", "Hematology", "Immunology"],
                },
            ],
        },
        CatalogEntry {
            job_title: "Healthcare Administrator",
            base_demand: 79,
            growth_range: (9, 14),
            salary: SalaryBand { min: 65_000, max: 100_000 },
            skills: vec![
                "Healthcare Management",
                "Finance",
                "Leadership",
                "Compliance",
                "Strategic Planning",
                "Healthcare IT",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Master of Healthcare Administration",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "2 years",
                    format: PathwayFormat::Online,
                    description: "Advanced degree in healthcare management and administration.",
                    cost: "$30,000 - $60,000",
                    alignment_score: 95,
                    skills: vec![
                        "Healthcare Policy",
                        "Financial Management",
                        "Quality Improvement",
                        "Leadership",
                    ],
                },
            ],
        },
        CatalogEntry {
            job_title: "Physician Assistant",
            base_demand: 85,
            growth_range: (15, 22),
            salary: SalaryBand { min: 95_000, max: 130_000 },
            skills: vec![
                "Clinical Medicine",
                "Patient Diagnosis",
                "Treatment Planning",
                "Pharmacology",
                "Medical Procedures",
                "Patient Communication",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Master of Physician Assistant Studies",
                    kind: PathwayKind::Degree,
                    institution: "PA School",
                    duration: "2-3 years",
                    format: PathwayFormat::InPerson,
                    description: "Professional master's degree for physician assistants.",
                    cost: "$80,000 - $120,000",
                    alignment_score: 98,
                    skills: vec![
                        "Clinical Medicine",
                        "Diagnostic Skills",
                        "Patient Care",
                        "Medical Ethics",
                    ],
                },
            ],
        },
    ]
}

fn finance_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            job_title: "Financial Analyst",
            base_demand: 73,
            growth_range: (6, 10),
            salary: SalaryBand { min: 60_000, max: 90_000 },
            skills: vec![
                "Financial Modeling",
                "Excel",
                "Data Analysis",
                "Valuation",
                "Risk Assessment",
                "Financial Reporting",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "CFA Charter",
                    kind: PathwayKind::Certification,
                    institution: "CFA Institute",
                    duration: "2-4 years",
                    format: PathwayFormat::Online,
                    description: "Globally recognized finance qualification for investment professionals.",
                    cost: "$2,000 - $5,000",
                    alignment_score: 96,
                    skills: vec![
                        "Investment Analysis",
                        "Portfolio Management",
                        "Ethics",
                        "Financial Reporting",
                    ],
                },
                EducationPathway {
                    title: "Finance Degree",
                    kind: PathwayKind::Degree,
                    institution: "Business School",
                    duration: "4 years",
                    format: PathwayFormat::InPerson,
                    description: "Bachelor's degree in Finance with focus on financial analysis.",
                    cost: "$40,000 - $80,000",
                    alignment_score: 94,
                    skills: vec![
                        "Corporate Finance",
                        "Investment Theory",
                        "Financial Markets",
                        "Accounting",
                    ],
                },
            ],
        },
        CatalogEntry {
            job_title: "Investment Banker",
            base_demand: 69,
            growth_range: (4, 8),
            salary: SalaryBand { min: 100_000, max: 200_000 },
            skills: vec![
                "Financial Modeling",
                "M&A",
                "Capital Markets",
                "Valuation",
                "Client Relations",
                "Presentation Skills",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "MBA in Finance",
                    kind: PathwayKind::Degree,
                    institution: "Top Business School",
                    duration: "2 years",
                    format: PathwayFormat::InPerson,
                    description: "Master of Business Administration with finance concentration.",
                    cost: "$100,000 - $200,000",
                    alignment_score: 97,
                    skills: vec!["Advanced Finance", "Strategy", "Leadership", "Networking"],
                },
            ],
        },
        CatalogEntry {
            job_title: "Risk Manager",
            base_demand: 71,
            growth_range: (8, 12),
            salary: SalaryBand { min: 80_000, max: 120_000 },
            skills: vec![
                "Risk Assessment",
                "Quantitative Analysis",
                "Regulatory Compliance",
                "Statistical Modeling",
                "Risk Mitigation",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Financial Risk Manager (FRM)",
                    kind: PathwayKind::Certification,
                    institution: "GARP",
                    duration: "1-2 years",
                    format: PathwayFormat::Online,
                    description: "Global standard for financial risk management certification.",
                    cost: "$1,000 - $2,000",
                    alignment_score: 95,
                    skills: vec![
                        "Risk Management",
                        "Quantitative Analysis",
                        "Market Risk",
                        "Credit Risk",
                    ],
                },
            ],
        },
        CatalogEntry {
            job_title: "Fintech Developer",
            base_demand: 77,
            growth_range: (18, 25),
            salary: SalaryBand { min: 90_000, max: 140_000 },
            skills: vec![
                "Blockchain",
                "Python",
                "Financial APIs",
                "Security",
                "Mobile Development",
                "Payment Systems",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "FinTech and Digital Banking",
                    kind: PathwayKind::Certification,
                    institution: "Institute of Bankers Sri Lanka",
                    duration: "6-9 months",
                    format: PathwayFormat::Hybrid,
                    description: "Comprehensive fintech education tailored for Sri Lankan market.",
                    cost: "$350 - $600",
                    alignment_score: 93,
                    skills: vec!["FinTech", "Digital Banking", "Blockchain", "Financial Analytics"],
                },
                EducationPathway {
                    title: "Blockchain Development Bootcamp",
                    kind: PathwayKind::Bootcamp,
                    institution: "Tech Institute",
                    duration: "4 months",
                    format: PathwayFormat::Online,
                    description: "Intensive program focusing on blockchain and cryptocurrency development.",
                    cost: "$8,000 - $12,000",
                    alignment_score: 88,
                    skills: vec!["Blockchain", "Smart Contracts", "Cryptocurrency", "DeFi"],
                },
            ],
        },
        CatalogEntry {
            job_title: "Compliance Officer",
            base_demand: 74,
            growth_range: (10, 15),
            salary: SalaryBand { min: 70_000, max: 110_000 },
            skills: vec![
                "Regulatory Knowledge",
                "Risk Assessment",
                "Policy Development",
                "Audit",
                "Legal Compliance",
                "Documentation",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Certified Compliance Professional",
                    kind: PathwayKind::Certification,
                    institution: "Compliance Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certification for compliance professionals.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 94,
                    skills: vec!["Regulatory Compliance", "Risk Management", "Ethics", "Audit"],
                },
            ],
        },
    ]
}

fn education_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            job_title: "Elementary Teacher",
            base_demand: 81,
            growth_range: (3, 6),
            salary: SalaryBand { min: 40_000, max: 65_000 },
            skills: vec![
                "Classroom Management",
                "Curriculum Development",
                "Child Psychology",
                "Educational Technology",
                "Assessment",
                "Communication",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Bachelor of Education",
                    kind: PathwayKind::Degree,
                    institution: "Education College",
                    duration: "4 years",
                    format: PathwayFormat::InPerson,
                    description: "Bachelor's degree in elementary education with teaching certification.",
                    cost: "$30,000 - $60,000",
                    alignment_score: 98,
                    skills: vec![
                        "Teaching Methods",
                        "Child Development",
                        "Curriculum Planning",
                        "Classroom Management",
                    ],
                },
            ],
        },
        CatalogEntry {
            job_title: "Special Education Teacher",
            base_demand: 84,
            growth_range: (8, 12),
            salary: SalaryBand { min: 45_000, max: 70_000 },
            skills: vec![
                "Special Needs Education",
                "IEP Development",
                "Behavioral Management",
                "Adaptive Technology",
                "Family Collaboration",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Master in Special Education",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Advanced degree specializing in special education methods.",
                    cost: "$25,000 - $50,000",
                    alignment_score: 97,
                    skills: vec![
                        "Special Education Law",
                        "Assistive Technology",
                        "Behavioral Interventions",
                        "Assessment",
                    ],
                },
            ],
        },
        CatalogEntry {
            job_title: "Educational Technology Specialist",
            base_demand: 76,
            growth_range: (15, 22),
            salary: SalaryBand { min: 55_000, max: 80_000 },
            skills: vec![
                "Educational Software",
                "Learning Management Systems",
                "Digital Literacy",
                "Training",
                "Technical Support",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Educational Technology Master's",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "2 years",
                    format: PathwayFormat::Online,
                    description: "Master's degree focusing on technology integration in education.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 95,
                    skills: vec![
                        "Instructional Design",
                        "Learning Technologies",
                        "Digital Pedagogy",
                        "Data Analysis",
                    ],
                },
            ],
        },
        CatalogEntry {
            job_title: "School Counselor",
            base_demand: 78,
            growth_range: (6, 10),
            salary: SalaryBand { min: 50_000, max: 75_000 },
            skills: vec![
                "Counseling",
                "Student Development",
                "Crisis Intervention",
                "Career Guidance",
                "Mental Health",
                "Communication",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Master in School Counseling",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Master's degree in school counseling with practicum experience.",
                    cost: "$25,000 - $45,000",
                    alignment_score: 96,
                    skills: vec![
                        "Counseling Techniques",
                        "Student Assessment",
                        "Crisis Management",
                        "Group Counseling",
                    ],
                },
            ],
        },
        CatalogEntry {
            job_title: "Curriculum Developer",
            base_demand: 72,
            growth_range: (10, 15),
            salary: SalaryBand { min: 60_000, max: 85_000 },
            skills: vec![
                "Instructional Design",
                "Educational Standards",
                "Assessment Design",
                "Content Development",
                "Research",
                "Project Management",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Instructional Design Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Education Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate in instructional design and curriculum development.",
                    cost: "$3,000 - $6,000",
                    alignment_score: 93,
                    skills: vec![
                        "Curriculum Design",
                        "Learning Objectives",
                        "Assessment Methods",
                        "Educational Technology",
                    ],
                },
            ],
        },
    ]
}

fn manufacturing_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            job_title: "Manufacturing Engineer",
            base_demand: 74,
            growth_range: (5, 9),
            salary: SalaryBand { min: 65_000, max: 95_000 },
            skills: vec![
                "Process Optimization",
                "Lean Manufacturing",
                "CAD Software",
                "Quality Control",
                "Project Management",
                "Safety Standards",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Manufacturing Engineering Degree",
                    kind: PathwayKind::Degree,
                    institution: "Engineering School",
                    duration: "4 years",
                    format: PathwayFormat::InPerson,
                    description: "Bachelor's degree in manufacturing or industrial engineering.",
                    cost: "$50,000 - $90,000",
                    alignment_score: 96,
                    skills: vec![
                        "Manufacturing Processes",
                        "Quality Systems",
                        "Automation",
                        "Materials Science",
                    ],
                },
            ],
        },
        CatalogEntry {
            job_title: "Quality Control Inspector",
            base_demand: 71,
            growth_range: (3, 7),
            salary: SalaryBand { min: 45_000, max: 65_000 },
            skills: vec![
                "Quality Standards",
                "Inspection Techniques",
                "Statistical Analysis",
                "Documentation",
                "Problem Solving",
                "Attention to Detail",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Quality Management Certification",
                    kind: PathwayKind::Certification,
                    institution: "ASQ",
                    duration: "6 months",
                    format: PathwayFormat::Online,
                    description: "Professional certification in quality control and management.",
                    cost: "$1,000 - $2,000",
                    alignment_score: 92,
                    skills: vec![
                        "Quality Control",
                        "Statistical Process Control",
                        "ISO Standards",
                        "Auditing",
                    ],
                },
            ],
        },
        CatalogEntry {
            job_title: "Automation Technician",
            base_demand: 76,
            growth_range: (12, 18),
            salary: SalaryBand { min: 55_000, max: 80_000 },
            skills: vec![
                "PLC Programming",
                "Robotics",
                "Electrical Systems",
                "Troubleshooting",
                "Maintenance",
                "Safety Protocols",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Industrial Automation Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Technical Institute",
                    duration: "1 year",
                    format: PathwayFormat::Hybrid,
                    description: "Comprehensive program in industrial automation and robotics.",
                    cost: "$8,000 - $15,000",
                    alignment_score: 94,
                    skills: vec![
                        "PLC Programming",
                        "HMI Design",
                        "Robotics",
                        "Industrial Networks",
                    ],
                },
            ],
        },
        CatalogEntry {
            job_title: "Supply Chain Manager",
            base_demand: 78,
            growth_range: (8, 12),
            salary: SalaryBand { min: 70_000, max: 110_000 },
            skills: vec![
                "Logistics",
                "Inventory Management",
                "Vendor Relations",
                "Data Analysis",
                "Strategic Planning",
                "Cost Optimization",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Supply Chain Management Master's",
                    kind: PathwayKind::Degree,
                    institution: "Business School",
                    duration: "2 years",
                    format: PathwayFormat::Online,
                    description: "Master's degree specializing in supply chain and logistics management.",
                    cost: "$30,000 - $60,000",
                    alignment_score: 95,
                    skills: vec![
                        "Supply Chain Strategy",
                        "Procurement",
                        "Logistics",
                        "Risk Management",
                    ],
                },
            ],
        },
        CatalogEntry {
            job_title: "Industrial Designer",
            base_demand: 69,
            growth_range: (6, 10),
            salary: SalaryBand { min: 60_000, max: 85_000 },
            skills: vec![
                "Design Software",
                "Product Development",
                "User Experience",
                "Prototyping",
                "Materials Knowledge",
                "Creative Problem Solving",
            ],
            education_pathways: vec![
                EducationPathway {
                    title: "Industrial Design Degree",
                    kind: PathwayKind::Degree,
                    institution: "Design School",
                    duration: "4 years",
                    format: PathwayFormat::InPerson,
                    description: "Bachelor's degree in industrial or product design.",
                    cost: "$40,000 - $80,000",
                    alignment_score: 96,
                    skills: vec![
                        "Design Thinking",
                        "CAD Modeling",
                        "User Research",
                        "Manufacturing Processes",
                    ],
                },
            ],
        },
    ]
}

fn retail_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            job_title: "Store Manager",
            base_demand: 72,
            growth_range: (6, 9),
            salary: Catalog::industry_salary_base(Industry::Retail),
            skills: vec!["Communication", "Problem Solving", "Leadership", "Technical Skills"],
            education_pathways: vec![
                EducationPathway {
                    title: "Store Manager Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the store manager role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec!["Communication", "Problem Solving", "Leadership"],
                },
                EducationPathway {
                    title: "Advanced Retail Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in retail operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Retail", "Strategy", "Operations"],
                },
            ],
        },
        CatalogEntry {
            job_title: "Sales Analyst",
            base_demand: 70,
            growth_range: (9, 12),
            salary: Catalog::industry_salary_base(Industry::Retail),
            skills: vec!["Communication", "Problem Solving", "Leadership", "Technical Skills"],
            education_pathways: vec![
                EducationPathway {
                    title: "Sales Analyst Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the sales analyst role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec!["Communication", "Problem Solving", "Leadership"],
                },
                EducationPathway {
                    title: "Advanced Retail Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in retail operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Retail", "Strategy", "Operations"],
                },
            ],
        },
        CatalogEntry {
            job_title: "Customer Experience Manager",
            base_demand: 68,
            growth_range: (10, 13),
            salary: Catalog::industry_salary_base(Industry::Retail),
            skills: vec!["Communication", "Problem Solving", "Leadership", "Technical Skills"],
            education_pathways: vec![
                EducationPathway {
                    title: "Customer Experience Manager Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the customer experience manager role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec!["Communication", "Problem Solving", "Leadership"],
                },
                EducationPathway {
                    title: "Advanced Retail Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in retail operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Retail", "Strategy", "Operations"],
                },
            ],
        },
    ]
}

fn energy_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            job_title: "Energy Analyst",
            base_demand: 74,
            growth_range: (11, 13),
            salary: Catalog::industry_salary_base(Industry::Energy),
            skills: vec!["Energy Systems", "Data Analysis", "Renewable Energy"],
            education_pathways: vec![
                EducationPathway {
                    title: "Energy Analyst Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the energy analyst role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec!["Energy Systems", "Data Analysis", "Renewable Energy"],
                },
                EducationPathway {
                    title: "Advanced Energy Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in energy operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Energy", "Strategy", "Operations"],
                },
            ],
        },
        CatalogEntry {
            job_title: "Project Engineer",
            base_demand: 71,
            growth_range: (8, 10),
            salary: Catalog::industry_salary_base(Industry::Energy),
            skills: vec!["Communication", "Problem Solving", "Leadership", "Technical Skills"],
            education_pathways: vec![
                EducationPathway {
                    title: "Project Engineer Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the project engineer role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec!["Communication", "Problem Solving", "Leadership"],
                },
                EducationPathway {
                    title: "Advanced Energy Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in energy operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Energy", "Strategy", "Operations"],
                },
            ],
        },
        CatalogEntry {
            job_title: "Sustainability Coordinator",
            base_demand: 69,
            growth_range: (12, 13),
            salary: Catalog::industry_salary_base(Industry::Energy),
            skills: vec!["Communication", "Problem Solving", "Leadership", "Technical Skills"],
            education_pathways: vec![
                EducationPathway {
                    title: "Sustainability Coordinator Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the sustainability coordinator role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec!["Communication", "Problem Solving", "Leadership"],
                },
                EducationPathway {
                    title: "Advanced Energy Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in energy operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Energy", "Strategy", "Operations"],
                },
            ],
        },
    ]
}

fn entertainment_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            job_title: "Digital Content Manager",
            base_demand: 73,
            growth_range: (10, 12),
            salary: Catalog::industry_salary_base(Industry::Entertainment),
            skills: vec!["Communication", "Problem Solving", "Leadership", "Technical Skills"],
            education_pathways: vec![
                EducationPathway {
                    title: "Digital Content Manager Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the digital content manager role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec!["Communication", "Problem Solving", "Leadership"],
                },
                EducationPathway {
                    title: "Advanced Entertainment Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in entertainment operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Entertainment", "Strategy", "Operations"],
                },
            ],
        },
        CatalogEntry {
            job_title: "Media Analyst",
            base_demand: 66,
            growth_range: (8, 11),
            salary: Catalog::industry_salary_base(Industry::Entertainment),
            skills: vec!["Communication", "Problem Solving", "Leadership", "Technical Skills"],
            education_pathways: vec![
                EducationPathway {
                    title: "Media Analyst Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the media analyst role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec!["Communication", "Problem Solving", "Leadership"],
                },
                EducationPathway {
                    title: "Advanced Entertainment Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in entertainment operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Entertainment", "Strategy", "Operations"],
                },
            ],
        },
        CatalogEntry {
            job_title: "Production Coordinator",
            base_demand: 64,
            growth_range: (8, 9),
            salary: Catalog::industry_salary_base(Industry::Entertainment),
            skills: vec!["Communication", "Problem Solving", "Leadership", "Technical Skills"],
            education_pathways: vec![
                EducationPathway {
                    title: "Production Coordinator Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the production coordinator role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec!["Communication", "Problem Solving", "Leadership"],
                },
                EducationPathway {
                    title: "Advanced Entertainment Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in entertainment operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Entertainment", "Strategy", "Operations"],
                },
            ],
        },
    ]
}

fn telecommunications_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            job_title: "Network Engineer",
            base_demand: 78,
            growth_range: (9, 12),
            salary: Catalog::industry_salary_base(Industry::Telecommunications),
            skills: vec!["Network Administration", "Telecommunications", "System Architecture"],
            education_pathways: vec![
                EducationPathway {
                    title: "Network Engineer Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the network engineer role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec![
                        "Network Administration",
                        "Telecommunications",
                        "System Architecture",
                    ],
                },
                EducationPathway {
                    title: "Advanced Telecommunications Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in telecommunications operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Telecommunications", "Strategy", "Operations"],
                },
            ],
        },
        CatalogEntry {
            job_title: "Telecom Analyst",
            base_demand: 70,
            growth_range: (8, 10),
            salary: Catalog::industry_salary_base(Industry::Telecommunications),
            skills: vec!["Communication", "Problem Solving", "Leadership", "Technical Skills"],
            education_pathways: vec![
                EducationPathway {
                    title: "Telecom Analyst Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the telecom analyst role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec!["Communication", "Problem Solving", "Leadership"],
                },
                EducationPathway {
                    title: "Advanced Telecommunications Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in telecommunications operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Telecommunications", "Strategy", "Operations"],
                },
            ],
        },
        CatalogEntry {
            job_title: "Technical Support Manager",
            base_demand: 67,
            growth_range: (8, 9),
            salary: Catalog::industry_salary_base(Industry::Telecommunications),
            skills: vec!["Communication", "Problem Solving", "Leadership", "Technical Skills"],
            education_pathways: vec![
                EducationPathway {
                    title: "Technical Support Manager Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the technical support manager role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec!["Communication", "Problem Solving", "Leadership"],
                },
                EducationPathway {
                    title: "Advanced Telecommunications Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in telecommunications operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Telecommunications", "Strategy", "Operations"],
                },
            ],
        },
    ]
}

fn transportation_entries() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            job_title: "Logistics Coordinator",
            base_demand: 75,
            growth_range: (10, 12),
            salary: Catalog::industry_salary_base(Industry::Transportation),
            skills: vec!["Communication", "Problem Solving", "Leadership", "Technical Skills"],
            education_pathways: vec![
                EducationPathway {
                    title: "Logistics Coordinator Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the logistics coordinator role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec!["Communication", "Problem Solving", "Leadership"],
                },
                EducationPathway {
                    title: "Advanced Transportation Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in transportation operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Transportation", "Strategy", "Operations"],
                },
            ],
        },
        CatalogEntry {
            job_title: "Fleet Manager",
            base_demand: 68,
            growth_range: (8, 10),
            salary: Catalog::industry_salary_base(Industry::Transportation),
            skills: vec!["Communication", "Problem Solving", "Leadership", "Technical Skills"],
            education_pathways: vec![
                EducationPathway {
                    title: "Fleet Manager Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the fleet manager role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec!["Communication", "Problem Solving", "Leadership"],
                },
                EducationPathway {
                    title: "Advanced Transportation Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in transportation operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Transportation", "Strategy", "Operations"],
                },
            ],
        },
        CatalogEntry {
            job_title: "Transportation Analyst",
            base_demand: 71,
            growth_range: (9, 13),
            salary: Catalog::industry_salary_base(Industry::Transportation),
            skills: vec!["Communication", "Problem Solving", "Leadership", "Technical Skills"],
            education_pathways: vec![
                EducationPathway {
                    title: "Transportation Analyst Professional Certificate",
                    kind: PathwayKind::Certification,
                    institution: "Professional Institute",
                    duration: "6-12 months",
                    format: PathwayFormat::Online,
                    description: "Professional certificate covering the core practice of the transportation analyst role.",
                    cost: "$1,500 - $3,000",
                    alignment_score: 87,
                    skills: vec!["Communication", "Problem Solving", "Leadership"],
                },
                EducationPathway {
                    title: "Advanced Transportation Program",
                    kind: PathwayKind::Degree,
                    institution: "University",
                    duration: "1-2 years",
                    format: PathwayFormat::Hybrid,
                    description: "Graduate program in transportation operations and strategy.",
                    cost: "$20,000 - $40,000",
                    alignment_score: 91,
                    skills: vec!["Transportation", "Strategy", "Operations"],
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detailed_industries_carry_five_titles() {
        let catalog = Catalog::standard();
        for industry in [
            Industry::Technology,
            Industry::Healthcare,
            Industry::Finance,
            Industry::Education,
            Industry::Manufacturing,
        ] {
            assert_eq!(catalog.job_count(industry), 5, "{}", industry.slug());
        }
    }

    #[test]
    fn broad_industries_carry_three_titles_on_the_industry_band() {
        let catalog = Catalog::standard();
        for industry in [
            Industry::Retail,
            Industry::Energy,
            Industry::Entertainment,
            Industry::Telecommunications,
            Industry::Transportation,
        ] {
            let entries = catalog.entries_for(industry);
            assert_eq!(entries.len(), 3, "{}", industry.slug());
            for entry in entries {
                assert_eq!(entry.salary, Catalog::industry_salary_base(industry));
                assert_eq!(entry.education_pathways.len(), 2);
            }
        }
    }

    #[test]
    fn pathway_costs_are_quoted_in_dollars() {
        let catalog = Catalog::standard();
        for industry in Industry::ordered() {
            for entry in catalog.entries_for(industry) {
                for pathway in &entry.education_pathways {
                    assert!(pathway.cost.starts_with('$'), "{}", pathway.title);
                }
            }
        }
    }

    #[test]
    fn every_industry_has_titles() {
        let catalog = Catalog::standard();
        assert!(Industry::ordered()
            .into_iter()
            .all(|industry| catalog.job_count(industry) > 0));
    }

    #[test]
    fn software_engineer_row_matches_reference_values() {
        let entry = Catalog::standard()
            .entries_for(Industry::Technology)
            .iter()
            .find(|entry| entry.job_title == "Software Engineer")
            .expect("software engineer row present");
        assert_eq!(entry.base_demand, 85);
        assert_eq!(entry.growth_range, (12, 18));
        assert_eq!(entry.salary, SalaryBand { min: 80_000, max: 150_000 });
        assert_eq!(entry.education_pathways.len(), 3);
    }

    #[test]
    fn catalog_values_stay_within_expected_bounds() {
        let catalog = Catalog::standard();
        for industry in Industry::ordered() {
            for entry in catalog.entries_for(industry) {
                assert!(entry.base_demand <= 100, "{}", entry.job_title);
                assert!(entry.growth_range.0 <= entry.growth_range.1);
                assert!(entry.salary.min < entry.salary.max);
                assert!(entry
                    .education_pathways
                    .iter()
                    .all(|pathway| pathway.alignment_score <= 100));
            }
        }
    }
}
