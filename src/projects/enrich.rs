//! Presentation content keyed by project id and category.
//!
//! Each table is a closed match with an explicit fallback arm.

use super::model::{EnrichedProject, Project};

pub const DEFAULT_FEATURES: &[&str] = &["Coming soon..."];
pub const DEFAULT_TECH_STACK: &[&str] = &["Technology", "Innovation"];
pub const DEFAULT_DETAILED_DESCRIPTION: &str =
    "Innovative technology solution addressing real-world challenges.";

pub fn features(project_id: &str) -> &'static [&'static str] {
    match project_id {
        "smart-campus" => &[
            "Real-time environmental monitoring",
            "Energy consumption tracking",
            "Automated lighting and HVAC control",
            "Mobile dashboard for facility management",
        ],
        "ai-assistant" => &[
            "Personalized learning paths",
            "Natural language processing",
            "Progress tracking and analytics",
            "Multi-modal content support",
        ],
        "energy-monitor" => &[
            "Smart meter integration",
            "Predictive energy optimization",
            "Carbon footprint calculation",
            "Automated energy saving recommendations",
        ],
        "smart-parking" => &[
            "Real-time space detection",
            "Mobile app integration",
            "Payment gateway integration",
            "Analytics dashboard",
        ],
        "weather-station" => &[
            "Multi-sensor data collection",
            "Weather prediction algorithms",
            "Alert system integration",
            "Historical data analysis",
        ],
        _ => DEFAULT_FEATURES,
    }
}

pub fn tech_stack(category: &str) -> &'static [&'static str] {
    match category {
        "IoT Systems" => &["IoT", "Arduino", "WiFi", "Sensors"],
        "AI/ML" => &["AI/ML", "Python", "TensorFlow", "Neural Networks"],
        "Sustainability" => &["Sustainability", "Sensors", "Analytics", "Dashboard"],
        "Environmental" => &["Weather", "Sensors", "Prediction", "Alerts"],
        "Robotics" => &["Robotics", "Computer Vision", "ROS", "Navigation"],
        _ => DEFAULT_TECH_STACK,
    }
}

pub fn detailed_description(project_id: &str) -> &'static str {
    match project_id {
        "smart-campus" => "A comprehensive IoT-enabled campus monitoring system with real-time data analytics, environmental sensing, and automated building management capabilities.",
        "ai-assistant" => "A machine learning powered educational companion that provides personalized learning experiences and adaptive content delivery for students.",
        "energy-monitor" => "Real-time energy consumption tracking and optimization system that helps reduce carbon footprint through intelligent monitoring and automated controls.",
        "smart-parking" => "Automated parking management system with real-time space detection, mobile app integration, and intelligent routing.",
        "weather-station" => "Comprehensive weather monitoring system with predictive analytics, environmental sensors, and automated alert systems.",
        _ => DEFAULT_DETAILED_DESCRIPTION,
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn enrich(project: Project) -> EnrichedProject {
    EnrichedProject {
        features: owned(features(&project.id)),
        tech_stack: owned(tech_stack(&project.category)),
        detailed_description: detailed_description(&project.id).to_string(),
        project,
    }
}
