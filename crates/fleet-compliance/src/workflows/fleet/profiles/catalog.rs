use super::rules::{ProfileRule, RolePredicate};
use super::{IndustryTable, ProfileCatalog};
use crate::config::DEFAULT_INDUSTRY;
use crate::workflows::fleet::domain::{Baseline, Profile};

pub(super) fn standard() -> ProfileCatalog {
    ProfileCatalog::new(general(), vec![retail(), healthcare(), financial_services()])
}

fn baseline(
    device_type: &str,
    min_ram: &str,
    min_cpu: &str,
    min_storage: &str,
    special: &str,
) -> Baseline {
    Baseline {
        device_type: device_type.to_string(),
        min_ram: min_ram.to_string(),
        min_cpu: min_cpu.to_string(),
        min_storage: min_storage.to_string(),
        special_requirements: special.to_string(),
    }
}

fn profile(
    industry: &str,
    id: &str,
    name: &str,
    department: &str,
    level: &str,
    baseline: Baseline,
) -> Profile {
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        department: department.to_string(),
        level: level.to_string(),
        industry: industry.to_string(),
        baseline,
    }
}

fn general() -> IndustryTable {
    let industry = DEFAULT_INDUSTRY;
    let profiles = vec![
        profile(
            industry,
            "knowledge-worker",
            "Knowledge Worker",
            "General",
            "Individual Contributor",
            baseline(
                "Desktop or Laptop",
                "16GB",
                "Intel Core i5 or equivalent",
                "256GB",
                "Office suite and video conferencing",
            ),
        ),
        profile(
            industry,
            "executive",
            "Executive",
            "Leadership",
            "Executive",
            baseline(
                "Laptop",
                "16GB",
                "Intel Core i7 or equivalent",
                "512GB",
                "Lightweight premium laptop with docking station",
            ),
        ),
        profile(
            industry,
            "creative",
            "Creative Professional",
            "Design",
            "Individual Contributor",
            baseline(
                "Desktop",
                "32GB",
                "Intel Core i7 or equivalent",
                "1024GB",
                "Dedicated GPU and color-accurate display",
            ),
        ),
        profile(
            industry,
            "power-user",
            "Power User",
            "Engineering",
            "Senior",
            baseline(
                "Desktop or Laptop",
                "16GB",
                "Intel Core i7 / AMD Ryzen 7 or better",
                "256GB",
                "Local development tooling and dual monitors",
            ),
        ),
        profile(
            industry,
            "field-worker",
            "Field Worker",
            "Operations",
            "Frontline",
            baseline(
                "Laptop",
                "8GB",
                "Intel Core i5 or equivalent",
                "256GB",
                "Rugged chassis with LTE connectivity",
            ),
        ),
        profile(
            industry,
            "task-worker",
            "Task Worker",
            "Support",
            "Frontline",
            baseline(
                "Desktop",
                "8GB",
                "Intel Core i3 or equivalent",
                "128GB",
                "Shared workstation, thin-client capable",
            ),
        ),
    ];

    let rules = vec![
        ProfileRule::new(
            "executive",
            RolePredicate::role_any(&["chief", "president", "ceo", "cfo"]),
        ),
        ProfileRule::new(
            "creative",
            RolePredicate::AnyOf(vec![
                RolePredicate::department_any(&["design", "creative", "media"]),
                RolePredicate::role_any(&["designer", "video", "animator", "illustrator"]),
            ]),
        ),
        ProfileRule::new(
            "power-user",
            RolePredicate::AnyOf(vec![
                RolePredicate::department_any(&["engineering", "development", "data", "r&d"]),
                RolePredicate::role_any(&[
                    "developer",
                    "engineer",
                    "architect",
                    "data scientist",
                    "devops",
                ]),
            ]),
        ),
        ProfileRule::new(
            "field-worker",
            RolePredicate::AllOf(vec![
                RolePredicate::department_any(&[
                    "field",
                    "operations",
                    "logistics",
                    "facilities",
                    "warehouse",
                ]),
                RolePredicate::role_any(&[
                    "technician",
                    "driver",
                    "inspector",
                    "installer",
                    "field",
                ]),
            ]),
        ),
        ProfileRule::new(
            "task-worker",
            RolePredicate::role_any(&[
                "clerk",
                "receptionist",
                "cashier",
                "data entry",
                "call center",
            ]),
        ),
    ];

    IndustryTable::builtin(industry, &["default", "generic"], profiles, rules)
}

fn retail() -> IndustryTable {
    let industry = "retail";
    let profiles = vec![
        profile(
            industry,
            "store-associate",
            "Store Associate",
            "Store Operations",
            "Frontline",
            baseline(
                "Desktop",
                "8GB",
                "Intel Core i3 or equivalent",
                "128GB",
                "Shared back-office workstation",
            ),
        ),
        profile(
            industry,
            "district-manager",
            "District Manager",
            "Store Operations",
            "Manager",
            baseline(
                "Laptop",
                "16GB",
                "Intel Core i7 or equivalent",
                "512GB",
                "Travel-ready laptop with LTE",
            ),
        ),
        profile(
            industry,
            "store-manager",
            "Store Manager",
            "Store Operations",
            "Manager",
            baseline(
                "Laptop",
                "16GB",
                "Intel Core i5 or equivalent",
                "256GB",
                "Back-office reporting and scheduling",
            ),
        ),
        profile(
            industry,
            "pharmacist",
            "Pharmacist",
            "Pharmacy",
            "Professional",
            baseline(
                "Desktop",
                "16GB",
                "Intel Core i5 or equivalent",
                "256GB",
                "Certified for the pharmacy management system",
            ),
        ),
        profile(
            industry,
            "cashier",
            "Cashier",
            "Front End",
            "Frontline",
            baseline(
                "Desktop",
                "8GB",
                "Intel Core i3 or equivalent",
                "128GB",
                "Point-of-sale peripherals",
            ),
        ),
        profile(
            industry,
            "merchandising-analyst",
            "Merchandising Analyst",
            "Corporate",
            "Individual Contributor",
            baseline(
                "Desktop or Laptop",
                "16GB",
                "Intel Core i7 or equivalent",
                "512GB",
                "Spreadsheet-heavy analytics",
            ),
        ),
    ];

    // District and regional managers must be resolved before the generic manager rule.
    let rules = vec![
        ProfileRule::new(
            "district-manager",
            RolePredicate::AllOf(vec![
                RolePredicate::role_any(&["district", "regional", "area"]),
                RolePredicate::role("manager"),
            ]),
        ),
        ProfileRule::new("store-manager", RolePredicate::role("manager")),
        ProfileRule::new(
            "pharmacist",
            RolePredicate::AnyOf(vec![
                RolePredicate::role("pharmac"),
                RolePredicate::department("pharmacy"),
            ]),
        ),
        ProfileRule::new(
            "cashier",
            RolePredicate::AnyOf(vec![
                RolePredicate::role_any(&["cashier", "checkout"]),
                RolePredicate::department("front end"),
            ]),
        ),
        ProfileRule::new(
            "merchandising-analyst",
            RolePredicate::department_any(&["merchandising", "corporate", "planning", "finance"]),
        ),
    ];

    IndustryTable::builtin(
        industry,
        &["retail & consumer", "consumer goods", "ecommerce"],
        profiles,
        rules,
    )
}

fn healthcare() -> IndustryTable {
    let industry = "healthcare";
    let profiles = vec![
        profile(
            industry,
            "clinical-staff",
            "Clinical Staff",
            "Nursing",
            "Frontline",
            baseline(
                "Desktop or Laptop",
                "8GB",
                "Intel Core i5 or equivalent",
                "256GB",
                "EHR access with badge tap login",
            ),
        ),
        profile(
            industry,
            "physician",
            "Physician",
            "Medical Staff",
            "Professional",
            baseline(
                "Laptop",
                "16GB",
                "Intel Core i7 or equivalent",
                "512GB",
                "Dictation software and EHR",
            ),
        ),
        profile(
            industry,
            "imaging-specialist",
            "Imaging Specialist",
            "Radiology",
            "Professional",
            baseline(
                "Desktop",
                "32GB",
                "Intel Core i7 / Xeon or better",
                "1024GB",
                "DICOM viewer with diagnostic monitors",
            ),
        ),
        profile(
            industry,
            "front-desk",
            "Front Desk",
            "Patient Access",
            "Frontline",
            baseline(
                "Desktop",
                "8GB",
                "Intel Core i3 or equivalent",
                "128GB",
                "Document scanner and label printer",
            ),
        ),
        profile(
            industry,
            "health-informatics",
            "Health Informatics",
            "Informatics",
            "Individual Contributor",
            baseline(
                "Desktop or Laptop",
                "16GB",
                "Intel Core i7 or equivalent",
                "512GB",
                "Analytics tooling with HIPAA audit logging",
            ),
        ),
    ];

    let rules = vec![
        ProfileRule::new(
            "physician",
            RolePredicate::role_any(&["physician", "doctor", "surgeon", "hospitalist"]),
        ),
        ProfileRule::new(
            "imaging-specialist",
            RolePredicate::AnyOf(vec![
                RolePredicate::department_any(&["radiology", "imaging"]),
                RolePredicate::role_any(&["radiolog", "sonographer", "mri"]),
            ]),
        ),
        ProfileRule::new(
            "clinical-staff",
            RolePredicate::role_any(&["nurse", "therapist", "medical assistant", "caregiver"]),
        ),
        ProfileRule::new(
            "front-desk",
            RolePredicate::AnyOf(vec![
                RolePredicate::role_any(&["receptionist", "scheduler", "front desk", "registrar"]),
                RolePredicate::department_any(&["admissions", "registration"]),
            ]),
        ),
        ProfileRule::new(
            "health-informatics",
            RolePredicate::AnyOf(vec![
                RolePredicate::department_any(&[
                    "informatics",
                    "information technology",
                    "analytics",
                ]),
                RolePredicate::role_any(&["analyst", "engineer"]),
            ]),
        ),
    ];

    IndustryTable::builtin(
        industry,
        &["health care", "hospital", "medical", "clinical"],
        profiles,
        rules,
    )
}

fn financial_services() -> IndustryTable {
    let industry = "financial services";
    let profiles = vec![
        profile(
            industry,
            "branch-staff",
            "Branch Staff",
            "Retail Banking",
            "Frontline",
            baseline(
                "Desktop",
                "8GB",
                "Intel Core i5 or equivalent",
                "256GB",
                "Branch system peripherals",
            ),
        ),
        profile(
            industry,
            "trader",
            "Trader",
            "Trading",
            "Professional",
            baseline(
                "Desktop",
                "64GB",
                "Intel Core i9 or better",
                "1024GB",
                "Multi-monitor workstation on the low-latency network",
            ),
        ),
        profile(
            industry,
            "quant-analyst",
            "Quantitative Analyst",
            "Risk & Analytics",
            "Professional",
            baseline(
                "Desktop or Laptop",
                "32GB",
                "Intel Core i7 or equivalent",
                "512GB",
                "Modeling and analytics tooling",
            ),
        ),
        profile(
            industry,
            "advisor",
            "Financial Advisor",
            "Wealth Management",
            "Professional",
            baseline(
                "Laptop",
                "16GB",
                "Intel Core i5 or equivalent",
                "256GB",
                "Encrypted laptop for client meetings",
            ),
        ),
        profile(
            industry,
            "teller",
            "Teller",
            "Retail Banking",
            "Frontline",
            baseline(
                "Desktop",
                "8GB",
                "Intel Core i3 or equivalent",
                "128GB",
                "Cash recycler integration",
            ),
        ),
    ];

    let rules = vec![
        ProfileRule::new(
            "trader",
            RolePredicate::AnyOf(vec![
                RolePredicate::role_any(&["trader", "trading"]),
                RolePredicate::department("trading"),
            ]),
        ),
        ProfileRule::new(
            "quant-analyst",
            RolePredicate::role_any(&["analyst", "quant", "risk"]),
        ),
        ProfileRule::new(
            "advisor",
            RolePredicate::role_any(&["advisor", "adviser", "wealth", "relationship manager"]),
        ),
        ProfileRule::new("teller", RolePredicate::role("teller")),
    ];

    IndustryTable::builtin(
        industry,
        &["finance", "banking", "financial", "insurance"],
        profiles,
        rules,
    )
}
