//! Hand-authored records used when a catalog can't be loaded, so pages are never empty.

use crate::events::model::{Capacity, Event, EventDate, EventStatus, Registration};
use crate::projects::model::{Project, ProjectStatus};

pub fn fallback_events() -> Vec<Event> {
    vec![
        Event {
            id: "iot-fundamentals-workshop".to_string(),
            status: EventStatus::Upcoming,
            event_type: "Workshop".to_string(),
            title: "IoT Fundamentals Workshop".to_string(),
            description: "Get hands-on with microcontrollers and sensors and build your first connected device.".to_string(),
            date: EventDate::new("Mar", "15", "2025"),
            time: "2:00 PM - 6:00 PM".to_string(),
            location: "Engineering Building, Lab 204".to_string(),
            capacity: Some(Capacity {
                total: 30,
                available: 12,
                registered: 18,
                unit: None,
            }),
            tags: vec![
                "Beginner Friendly".to_string(),
                "Hardware".to_string(),
                "Arduino".to_string(),
            ],
            agenda: vec![],
            prerequisites: None,
            organizers: vec![],
            registration: Registration {
                url: "#".to_string(),
                button_text: "Register Now".to_string(),
            },
        },
        Event {
            id: "smart-city-hackathon".to_string(),
            status: EventStatus::Past,
            event_type: "Hackathon".to_string(),
            title: "Smart City Hackathon".to_string(),
            description: "A 24-hour challenge to prototype connected solutions for urban problems.".to_string(),
            date: EventDate::new("Nov", "8", "2024"),
            time: "9:00 AM - 9:00 PM".to_string(),
            location: "Innovation Hub".to_string(),
            capacity: Some(Capacity {
                total: 80,
                available: 0,
                registered: 64,
                unit: None,
            }),
            tags: vec!["Advanced".to_string(), "Teamwork".to_string()],
            agenda: vec![],
            prerequisites: None,
            organizers: vec![],
            registration: Registration {
                url: "#".to_string(),
                button_text: "View Highlights".to_string(),
            },
        },
    ]
}

pub fn fallback_projects() -> Vec<Project> {
    vec![
        Project {
            id: "smart-campus".to_string(),
            title: "Smart Campus Network".to_string(),
            description: "IoT-enabled campus monitoring system with real-time data analytics."
                .to_string(),
            placeholder: Some("Smart Campus".to_string()),
            category: "IoT Systems".to_string(),
            status: ProjectStatus::Active,
            featured: true,
            detail_page: "project-smart-campus.html".to_string(),
        },
        Project {
            id: "ai-assistant".to_string(),
            title: "AI Learning Assistant".to_string(),
            description: "Machine learning powered educational companion for students."
                .to_string(),
            placeholder: Some("AI Assistant".to_string()),
            category: "AI/ML".to_string(),
            status: ProjectStatus::Development,
            featured: true,
            detail_page: "project-ai-assistant.html".to_string(),
        },
        Project {
            id: "energy-monitor".to_string(),
            title: "Sustainable Energy Monitor".to_string(),
            description: "Real-time energy consumption tracking and optimization system."
                .to_string(),
            placeholder: Some("Green Tech".to_string()),
            category: "Sustainability".to_string(),
            status: ProjectStatus::Planning,
            featured: true,
            detail_page: "project-energy-monitor.html".to_string(),
        },
    ]
}
