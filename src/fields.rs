//! Questionnaire field registry
//!
//! Every field the questionnaire asks about, its inclusive valid range, its
//! seeded default, and where it is shown. Declaration order is the order the
//! prediction service expects in the feature vector.

use std::fmt;

/// Inclusive numeric range for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i32,
    pub max: i32,
}

impl Bounds {
    const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= f64::from(self.min) && value <= f64::from(self.max)
    }
}

/// Questionnaire section a field is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Psychological,
    Physical,
    Academic,
    SocialEnv,
    Environmental,
}

impl Category {
    /// Sections laid out side by side in the main grid
    pub const GRID: [Category; 4] = [
        Category::Psychological,
        Category::Physical,
        Category::Academic,
        Category::SocialEnv,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Psychological => "PSYCHOLOGICAL",
            Category::Physical => "PHYSICAL",
            Category::Academic => "ACADEMIC",
            Category::SocialEnv => "SOCIAL/ENV",
            Category::Environmental => "ENVIRONMENTAL",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Psychological => egui_phosphor::regular::BRAIN,
            Category::Physical => egui_phosphor::regular::BARBELL,
            Category::Academic => egui_phosphor::regular::GRADUATION_CAP,
            Category::SocialEnv => egui_phosphor::regular::HOUSE,
            Category::Environmental => egui_phosphor::regular::GLOBE_HEMISPHERE_WEST,
        }
    }

    /// Fields in the order they appear inside the section
    pub fn fields(&self) -> &'static [Field] {
        use Field::*;
        match self {
            Category::Psychological => &[AnxietyLevel, SelfEsteem, Depression, MentalHealthHistory],
            Category::Physical => &[SleepQuality, Headache, BloodPressure, BreathingProblem],
            Category::Academic => &[
                AcademicPerformance,
                StudyLoad,
                TeacherStudentRelationship,
                FutureCareerConcerns,
            ],
            Category::SocialEnv => &[SocialSupport, PeerPressure, ExtracurricularActivities, Bullying],
            Category::Environmental => &[NoiseLevel, LivingConditions, Safety, BasicNeeds],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AnxietyLevel,
    SelfEsteem,
    MentalHealthHistory,
    Depression,
    Headache,
    BloodPressure,
    SleepQuality,
    BreathingProblem,
    NoiseLevel,
    LivingConditions,
    Safety,
    BasicNeeds,
    AcademicPerformance,
    StudyLoad,
    TeacherStudentRelationship,
    FutureCareerConcerns,
    SocialSupport,
    PeerPressure,
    ExtracurricularActivities,
    Bullying,
}

pub const FIELD_COUNT: usize = 20;

/// Static row of the registry
struct FieldSpec {
    name: &'static str,
    label: &'static str,
    bounds: Bounds,
    default: i32,
    category: Category,
}

const fn spec(
    name: &'static str,
    label: &'static str,
    min: i32,
    max: i32,
    default: i32,
    category: Category,
) -> FieldSpec {
    FieldSpec { name, label, bounds: Bounds::new(min, max), default, category }
}

// Indexed by `Field as usize`
static REGISTRY: [FieldSpec; FIELD_COUNT] = [
    spec("anxiety_level", "Anxiety", 0, 21, 10, Category::Psychological),
    spec("self_esteem", "Self Esteem", 0, 30, 15, Category::Psychological),
    spec("mental_health_history", "MH History", 0, 1, 0, Category::Psychological),
    spec("depression", "Depression", 0, 27, 10, Category::Psychological),
    spec("headache", "Headache", 0, 5, 2, Category::Physical),
    spec("blood_pressure", "BP Level", 1, 3, 2, Category::Physical),
    spec("sleep_quality", "Sleep Quality", 0, 5, 3, Category::Physical),
    spec("breathing_problem", "Breathing", 0, 5, 2, Category::Physical),
    spec("noise_level", "Noise Level", 0, 5, 2, Category::Environmental),
    spec("living_conditions", "Living Conditions", 0, 5, 3, Category::Environmental),
    spec("safety", "Safety", 0, 5, 3, Category::Environmental),
    spec("basic_needs", "Basic Needs", 0, 5, 3, Category::Environmental),
    spec("academic_performance", "Performance", 0, 5, 3, Category::Academic),
    spec("study_load", "Study Load", 0, 5, 3, Category::Academic),
    spec("teacher_student_relationship", "Teacher Rel", 0, 5, 3, Category::Academic),
    spec("future_career_concerns", "Career Concern", 0, 5, 3, Category::Academic),
    spec("social_support", "Social Support", 0, 3, 2, Category::SocialEnv),
    spec("peer_pressure", "Peer Pressure", 0, 5, 3, Category::SocialEnv),
    spec("extracurricular_activities", "Extracurricular", 0, 5, 3, Category::SocialEnv),
    spec("bullying", "Bullying", 0, 5, 2, Category::SocialEnv),
];

impl Field {
    /// All fields in declaration (and feature vector) order
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::AnxietyLevel,
        Field::SelfEsteem,
        Field::MentalHealthHistory,
        Field::Depression,
        Field::Headache,
        Field::BloodPressure,
        Field::SleepQuality,
        Field::BreathingProblem,
        Field::NoiseLevel,
        Field::LivingConditions,
        Field::Safety,
        Field::BasicNeeds,
        Field::AcademicPerformance,
        Field::StudyLoad,
        Field::TeacherStudentRelationship,
        Field::FutureCareerConcerns,
        Field::SocialSupport,
        Field::PeerPressure,
        Field::ExtracurricularActivities,
        Field::Bullying,
    ];

    fn spec(&self) -> &'static FieldSpec {
        &REGISTRY[*self as usize]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// snake_case key used by the prediction service
    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.name() == name)
    }

    pub fn bounds(&self) -> Bounds {
        self.spec().bounds
    }

    pub fn default_value(&self) -> f64 {
        f64::from(self.spec().default)
    }

    pub fn category(&self) -> Category {
        self.spec().category
    }

    /// Key with underscores replaced by spaces, as used in validation messages
    pub fn display_name(&self) -> String {
        self.name().replace('_', " ")
    }

    /// Input label including the accepted range, e.g. "Anxiety (0-21)"
    pub fn label(&self) -> String {
        let Bounds { min, max } = self.bounds();
        if min == 0 && max == 1 {
            format!("{} (0/1)", self.spec().label)
        } else {
            format!("{} ({}-{})", self.spec().label, min, max)
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up a field's bounds by its key
pub fn bounds_for(name: &str) -> Option<Bounds> {
    Field::from_name(name).map(|f| f.bounds())
}
