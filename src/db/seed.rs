// db/seed.rs
//
// Demo data used to lazily initialise empty local collections. Listing
// creators (u2..u12) exist only as records embedded in their listings,
// which is what the identity read-repair path resolves against.
use chrono::{Days, NaiveDate, TimeZone, Utc};
use rand::{rng, Rng};

use crate::models::billmodel::{Bill, BillStatus, BillType};
use crate::models::deliverymodel::{DeliveryTask, TaskStatus};
use crate::models::rentalmodel::{ItemCategory, ItemStatus, RateUnit, RentalItem};
use crate::models::ridemodel::{Ride, VehicleType};
use crate::models::usermodel::User;
use crate::models::ListingMode;

pub const SEED_USER_ID: &str = "u1";

/// Roughly 60 days of past activity with random gaps, enough to render a
/// believable streak calendar.
fn mock_activity_log() -> Vec<NaiveDate> {
    let today = Utc::now().date_naive();
    let mut rng = rng();
    (0..60u64)
        .filter(|_| rng.random_bool(0.7))
        .filter_map(|i| today.checked_sub_days(Days::new(i)))
        .collect()
}

pub fn seed_user() -> User {
    User {
        id: SEED_USER_ID.to_string(),
        name: "Rahul Sharma".to_string(),
        email: "rahul.s@iimraipur.ac.in".to_string(),
        avatar: "https://picsum.photos/seed/rahul/100/100".to_string(),
        bio: "MBA Candidate 2025. Love cycling and reading.".to_string(),
        rating: 4.8,
        verified: true,
        current_streak: 12,
        activity_log: mock_activity_log(),
    }
}

fn listing_creator(id: &str, name: &str, avatar_seed: &str, rating: f64) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        avatar: format!("https://picsum.photos/seed/{}/100/100", avatar_seed),
        rating,
        ..seed_user()
    }
}

pub fn seed_users() -> Vec<User> {
    vec![seed_user()]
}

pub fn seed_rides() -> Vec<Ride> {
    vec![
        Ride {
            id: "r1".to_string(),
            driver: listing_creator("u2", "Amit Verma", "amit", 4.5),
            origin: "IIM Raipur Campus".to_string(),
            destination: "City Center Mall".to_string(),
            date: "Today".to_string(),
            time: "4:00 PM".to_string(),
            seats_available: 2,
            cost_per_person: 75.0,
            vehicle: VehicleType::Car,
            mode: ListingMode::Offer,
        },
        Ride {
            id: "r2".to_string(),
            driver: listing_creator("u3", "Priya Singh", "priya", 4.9),
            origin: "Hostel Block A".to_string(),
            destination: "Railway Station".to_string(),
            date: "Tomorrow".to_string(),
            time: "10:00 AM".to_string(),
            seats_available: 3,
            cost_per_person: 120.0,
            vehicle: VehicleType::Car,
            mode: ListingMode::Offer,
        },
        Ride {
            id: "r3".to_string(),
            driver: listing_creator("u4", "Karan Gill", "karan", 4.2),
            origin: "Library".to_string(),
            destination: "Faculty Block".to_string(),
            date: "Today".to_string(),
            time: "9:00 PM".to_string(),
            seats_available: 1,
            cost_per_person: 0.0,
            vehicle: VehicleType::Bike,
            mode: ListingMode::Offer,
        },
        Ride {
            id: "r4".to_string(),
            driver: listing_creator("u10", "Neha Roy", "neha", 4.6),
            origin: "City Center Mall".to_string(),
            destination: "Hostel H4".to_string(),
            date: "Today".to_string(),
            time: "8:30 PM".to_string(),
            seats_available: 1,
            cost_per_person: 50.0,
            vehicle: VehicleType::Car,
            mode: ListingMode::Request,
        },
    ]
}

pub fn seed_items() -> Vec<RentalItem> {
    vec![
        RentalItem {
            id: "i1".to_string(),
            owner: listing_creator("u5", "Sneha Gupta", "sneha", 4.7),
            title: "Financial Management Textbook".to_string(),
            category: ItemCategory::Academic,
            price: 50.0,
            rate_unit: RateUnit::Day,
            image: "https://picsum.photos/seed/book/200/200".to_string(),
            status: ItemStatus::Available,
            mode: ListingMode::Offer,
        },
        RentalItem {
            id: "i2".to_string(),
            owner: listing_creator("u6", "Rohan Das", "rohan", 4.6),
            title: "Philips Steam Iron".to_string(),
            category: ItemCategory::Appliances,
            price: 20.0,
            rate_unit: RateUnit::Hour,
            image: "https://picsum.photos/seed/iron/200/200".to_string(),
            status: ItemStatus::Available,
            mode: ListingMode::Offer,
        },
        RentalItem {
            id: "i3".to_string(),
            owner: listing_creator("u7", "Vikram Malhotra", "vikram", 4.8),
            title: "Badminton Racket Set".to_string(),
            category: ItemCategory::Sports,
            price: 0.0,
            rate_unit: RateUnit::Day,
            image: "https://picsum.photos/seed/badminton/200/200".to_string(),
            status: ItemStatus::Available,
            mode: ListingMode::Offer,
        },
        RentalItem {
            id: "i4".to_string(),
            owner: listing_creator("u11", "Arjun Reddy", "arjun", 4.3),
            title: "Scientific Calculator".to_string(),
            category: ItemCategory::Academic,
            price: 0.0,
            rate_unit: RateUnit::Day,
            image: "https://picsum.photos/seed/calculator/200/200".to_string(),
            status: ItemStatus::Available,
            mode: ListingMode::Request,
        },
    ]
}

pub fn seed_tasks() -> Vec<DeliveryTask> {
    vec![
        DeliveryTask {
            id: "t1".to_string(),
            requester: listing_creator("u8", "Anjali P.", "anjali", 4.9),
            title: "Groceries from City Market".to_string(),
            description: "Need milk, bread, and eggs from the main market.".to_string(),
            pickup: "City Market".to_string(),
            dropoff: "Hostel H4, Room 202".to_string(),
            offer_amount: 100.0,
            status: TaskStatus::Open,
            deadline: "7:00 PM Today".to_string(),
            mode: ListingMode::Request,
        },
        DeliveryTask {
            id: "t2".to_string(),
            requester: listing_creator("u9", "David K.", "david", 4.4),
            title: "Print Documents".to_string(),
            description: "Print 50 pages from stationary shop near gate.".to_string(),
            pickup: "Campus Stationary".to_string(),
            dropoff: "Library Entrance".to_string(),
            offer_amount: 40.0,
            status: TaskStatus::Open,
            deadline: "2:00 PM Today".to_string(),
            mode: ListingMode::Request,
        },
        DeliveryTask {
            id: "t3".to_string(),
            requester: listing_creator("u12", "Sameer J.", "sameer", 4.7),
            title: "Going to Magneto Mall".to_string(),
            description: "Heading to mall for 2 hours. Can pick up food or small items.".to_string(),
            pickup: "Magneto Mall".to_string(),
            dropoff: "Hostel H2".to_string(),
            offer_amount: 50.0,
            status: TaskStatus::Open,
            deadline: "5:30 PM Today".to_string(),
            mode: ListingMode::Offer,
        },
    ]
}

pub fn seed_bills() -> Vec<Bill> {
    vec![
        Bill {
            id: "b1".to_string(),
            user_id: SEED_USER_ID.to_string(),
            title: "Ride to Airport".to_string(),
            description: Some("Shared cab with Amit".to_string()),
            amount: 250.0,
            due_date: ymd(2024, 3, 28),
            status: BillStatus::Pending,
            bill_type: BillType::Ride,
            merchant_name: "Amit Verma".to_string(),
            paid_at: None,
        },
        Bill {
            id: "b2".to_string(),
            user_id: SEED_USER_ID.to_string(),
            title: "Canteen Snacks".to_string(),
            description: Some("Evening snacks at H4 Canteen".to_string()),
            amount: 45.0,
            due_date: ymd(2024, 3, 25),
            status: BillStatus::Paid,
            bill_type: BillType::Other,
            merchant_name: "Campus Canteen".to_string(),
            paid_at: Utc.with_ymd_and_hms(2024, 3, 25, 0, 0, 0).single(),
        },
        Bill {
            id: "b3".to_string(),
            user_id: SEED_USER_ID.to_string(),
            title: "Textbook Rental".to_string(),
            description: Some("Financial Mgmt Book for 2 days".to_string()),
            amount: 100.0,
            due_date: ymd(2024, 3, 20),
            status: BillStatus::Paid,
            bill_type: BillType::Rent,
            merchant_name: "Sneha Gupta".to_string(),
            paid_at: Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).single(),
        },
        Bill {
            id: "b4".to_string(),
            user_id: SEED_USER_ID.to_string(),
            title: "Delivery Fee".to_string(),
            description: Some("Groceries from City Market".to_string()),
            amount: 60.0,
            due_date: ymd(2024, 3, 29),
            status: BillStatus::Pending,
            bill_type: BillType::Delivery,
            merchant_name: "David K.".to_string(),
            paid_at: None,
        },
    ]
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
