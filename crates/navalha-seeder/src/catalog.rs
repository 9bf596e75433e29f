//! Demo dataset definitions.
//!
//! Pure data: names, prices and cross-references by index. The insert
//! logic in [`crate::seed`] resolves indices to generated row IDs, so the
//! integrity of every reference can be checked here without a database.

use navalha_domain::{AccountRole, AppointmentStatus, PaymentMethod};

// =============================================================================
// PEOPLE
// =============================================================================

pub struct UserSeed {
    pub name: &'static str,
    pub phone: &'static str,
}

pub const USERS: &[UserSeed] = &[
    UserSeed { name: "João Silva", phone: "+5511999999001" },
    UserSeed { name: "Maria Santos", phone: "+5511999999002" },
    UserSeed { name: "Pedro Oliveira", phone: "+5511999999003" },
    UserSeed { name: "Ana Costa", phone: "+5511999999004" },
    UserSeed { name: "Carlos Ferreira", phone: "+5511999999005" },
    UserSeed { name: "Juliana Almeida", phone: "+5511999999006" },
    UserSeed { name: "Roberto Lima", phone: "+5511999999007" },
    UserSeed { name: "Fernanda Souza", phone: "+5511999999008" },
];

pub struct EmployeeSeed {
    pub name: &'static str,
    pub phone: &'static str,
    pub image_url: &'static str,
}

pub const EMPLOYEES: &[EmployeeSeed] = &[
    EmployeeSeed {
        name: "Marcelo Barbeiro",
        phone: "+5511988888001",
        image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d",
    },
    EmployeeSeed {
        name: "Rafael Cortez",
        phone: "+5511988888002",
        image_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e",
    },
    EmployeeSeed {
        name: "Lucas Tesoura",
        phone: "+5511988888003",
        image_url: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d",
    },
    EmployeeSeed {
        name: "Patricia Style",
        phone: "+5511988888004",
        image_url: "https://images.unsplash.com/photo-1494790108377-be9c29b29330",
    },
    EmployeeSeed {
        name: "Bruna Hair",
        phone: "+5511988888005",
        image_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80",
    },
];

// =============================================================================
// CATALOG
// =============================================================================

pub struct ServiceSeed {
    pub name: &'static str,
    pub duration_min: i32,
    pub price: f64,
    pub description: &'static str,
    pub image_url: &'static str,
}

pub const SERVICES: &[ServiceSeed] = &[
    ServiceSeed {
        name: "Corte Masculino",
        duration_min: 30,
        price: 45.0,
        description: "Corte de cabelo masculino tradicional com acabamento a máquina",
        image_url: "https://images.unsplash.com/photo-1621605815971-fbc98d665033",
    },
    ServiceSeed {
        name: "Corte + Barba",
        duration_min: 50,
        price: 65.0,
        description: "Corte de cabelo masculino + barba completa com navalha",
        image_url: "https://images.unsplash.com/photo-1503951914875-452162b0f3f1",
    },
    ServiceSeed {
        name: "Barba",
        duration_min: 25,
        price: 35.0,
        description: "Barba completa com navalha e finalização",
        image_url: "https://images.unsplash.com/photo-1622286342621-4bd786c2447c",
    },
    ServiceSeed {
        name: "Sobrancelha",
        duration_min: 15,
        price: 20.0,
        description: "Design de sobrancelha masculina",
        image_url: "https://images.unsplash.com/photo-1634449571010-02389ed0f9b0",
    },
    ServiceSeed {
        name: "Pézinho",
        duration_min: 15,
        price: 15.0,
        description: "Acabamento de pézinho e contorno",
        image_url: "https://images.unsplash.com/photo-1605497788044-5a32c7078486",
    },
    ServiceSeed {
        name: "Corte Feminino",
        duration_min: 60,
        price: 80.0,
        description: "Corte de cabelo feminino com lavagem e secagem",
        image_url: "https://images.unsplash.com/photo-1560066984-138dadb4c035",
    },
    ServiceSeed {
        name: "Hidratação",
        duration_min: 45,
        price: 70.0,
        description: "Hidratação profunda para todos os tipos de cabelo",
        image_url: "https://images.unsplash.com/photo-1522337360788-8b13dee7a37e",
    },
    ServiceSeed {
        name: "Coloração",
        duration_min: 120,
        price: 150.0,
        description: "Coloração completa com produtos de alta qualidade",
        image_url: "https://images.unsplash.com/photo-1562322140-8baeececf3df",
    },
];

/// Which services each employee performs, by (employee, service) index
pub const EMPLOYEE_SERVICES: &[(usize, usize)] = &[
    // Marcelo - masculine specialist
    (0, 0),
    (0, 1),
    (0, 2),
    // Rafael - full masculine
    (1, 0),
    (1, 1),
    (1, 3),
    // Lucas - masculine basics
    (2, 0),
    (2, 2),
    (2, 4),
    // Patricia - full feminine
    (3, 5),
    (3, 6),
    (3, 7),
    // Bruna - feminine
    (4, 5),
    (4, 6),
];

pub struct ProductSeed {
    pub name: &'static str,
    pub price: f64,
    pub quantity: i32,
    pub is_featured: bool,
    pub image_url: &'static str,
}

pub const PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        name: "Pomada Modeladora Premium",
        price: 45.0,
        quantity: 50,
        is_featured: true,
        image_url: "https://images.unsplash.com/photo-1608248543803-ba4f8c70ae0b",
    },
    ProductSeed {
        name: "Shampoo Anticaspa",
        price: 35.0,
        quantity: 40,
        is_featured: true,
        image_url: "https://images.unsplash.com/photo-1585828922344-f2447d8ea6a0",
    },
    ProductSeed {
        name: "Óleo para Barba",
        price: 55.0,
        quantity: 30,
        is_featured: true,
        image_url: "https://images.unsplash.com/photo-1618633944995-d2e1f1d2e9e1",
    },
    ProductSeed {
        name: "Cera Modeladora",
        price: 40.0,
        quantity: 35,
        is_featured: false,
        image_url: "https://images.unsplash.com/photo-1620916566398-39f1143ab7be",
    },
    ProductSeed {
        name: "Condicionador Hidratante",
        price: 38.0,
        quantity: 45,
        is_featured: false,
        image_url: "https://images.unsplash.com/photo-1556228720-195a672e8a03",
    },
    ProductSeed {
        name: "Kit Pente + Escova",
        price: 65.0,
        quantity: 20,
        is_featured: false,
        image_url: "https://images.unsplash.com/photo-1522338140262-f46f5913618a",
    },
    ProductSeed {
        name: "Gel Fixador Forte",
        price: 28.0,
        quantity: 60,
        is_featured: false,
        image_url: "https://images.unsplash.com/photo-1616783943084-8aca2f827bf9",
    },
    ProductSeed {
        name: "Máscara Capilar Reparadora",
        price: 75.0,
        quantity: 25,
        is_featured: true,
        image_url: "https://images.unsplash.com/photo-1556228578-0d85b1a4d571",
    },
];

// =============================================================================
// SCHEDULING
// =============================================================================

/// Weekday working hours, Monday (1) through Friday (5)
pub const WEEKDAY_RANGE: std::ops::RangeInclusive<i16> = 1..=5;
pub const SATURDAY: i16 = 6;

pub const OPENING_TIME: &str = "09:00";
pub const CLOSING_TIME: &str = "18:00";
pub const SATURDAY_CLOSING_TIME: &str = "15:00";
pub const LUNCH_START: &str = "12:00";
pub const LUNCH_END: &str = "13:00";

pub struct AppointmentSeed {
    pub user: usize,
    pub employee: usize,
    pub service: usize,

    /// Days relative to seeding time; negative is in the past
    pub day_offset: i64,
    pub status: AppointmentStatus,
    pub payment: Option<PaymentMethod>,
}

pub const APPOINTMENTS: &[AppointmentSeed] = &[
    // Completed visits
    AppointmentSeed {
        user: 0,
        employee: 0,
        service: 0,
        day_offset: -7,
        status: AppointmentStatus::Done,
        payment: Some(PaymentMethod::Pix),
    },
    AppointmentSeed {
        user: 1,
        employee: 1,
        service: 1,
        day_offset: -5,
        status: AppointmentStatus::Done,
        payment: Some(PaymentMethod::Credit),
    },
    AppointmentSeed {
        user: 2,
        employee: 3,
        service: 5,
        day_offset: -3,
        status: AppointmentStatus::Done,
        payment: Some(PaymentMethod::Debit),
    },
    AppointmentSeed {
        user: 3,
        employee: 2,
        service: 2,
        day_offset: -2,
        status: AppointmentStatus::Done,
        payment: Some(PaymentMethod::Cash),
    },
    // Canceled yesterday
    AppointmentSeed {
        user: 4,
        employee: 0,
        service: 0,
        day_offset: -1,
        status: AppointmentStatus::Canceled,
        payment: None,
    },
    // Upcoming bookings
    AppointmentSeed {
        user: 5,
        employee: 1,
        service: 1,
        day_offset: 1,
        status: AppointmentStatus::Scheduled,
        payment: None,
    },
    AppointmentSeed {
        user: 6,
        employee: 3,
        service: 6,
        day_offset: 2,
        status: AppointmentStatus::Scheduled,
        payment: None,
    },
    AppointmentSeed {
        user: 7,
        employee: 4,
        service: 5,
        day_offset: 3,
        status: AppointmentStatus::Scheduled,
        payment: None,
    },
    AppointmentSeed {
        user: 0,
        employee: 0,
        service: 0,
        day_offset: 5,
        status: AppointmentStatus::Scheduled,
        payment: None,
    },
    AppointmentSeed {
        user: 1,
        employee: 2,
        service: 4,
        day_offset: 7,
        status: AppointmentStatus::Scheduled,
        payment: None,
    },
];

pub struct AppointmentProductSeed {
    pub appointment: usize,
    pub product: usize,
    pub quantity: i32,
}

/// Retail sold during the completed visits; price snapshots come from
/// [`PRODUCTS`] at insert time.
pub const APPOINTMENT_PRODUCTS: &[AppointmentProductSeed] = &[
    AppointmentProductSeed { appointment: 0, product: 0, quantity: 1 },
    AppointmentProductSeed { appointment: 1, product: 2, quantity: 1 },
    AppointmentProductSeed { appointment: 1, product: 3, quantity: 1 },
    AppointmentProductSeed { appointment: 2, product: 7, quantity: 2 },
    AppointmentProductSeed { appointment: 3, product: 1, quantity: 1 },
];

// =============================================================================
// ACCESS
// =============================================================================

/// bcrypt digest of "senha123", shared by every demo account
pub const PASSWORD_HASH: &str = "$2a$10$K7L1OJ45/4Y2nIvhRVpCe.FSmhDdWoXehVzJptJ/ok.pNsnKEv.lq";

pub struct AccountSeed {
    /// Login phone; employee accounts reuse the employee's phone
    pub phone: &'static str,
    pub role: AccountRole,
    pub employee: Option<usize>,
}

pub const ACCOUNTS: &[AccountSeed] = &[
    AccountSeed {
        phone: "+5511977777001",
        role: AccountRole::Admin,
        employee: None,
    },
    AccountSeed {
        phone: "+5511988888001",
        role: AccountRole::Employee,
        employee: Some(0),
    },
    AccountSeed {
        phone: "+5511988888002",
        role: AccountRole::Employee,
        employee: Some(1),
    },
];

pub struct ShowcasePhotoSeed {
    pub image_url: &'static str,
    pub description: &'static str,
    pub service: Option<usize>,
    pub employee: Option<usize>,
}

pub const SHOWCASE_PHOTOS: &[ShowcasePhotoSeed] = &[
    ShowcasePhotoSeed {
        image_url: "https://images.unsplash.com/photo-1622286342621-4bd786c2447c",
        description: "Corte masculino moderno",
        service: Some(0),
        employee: Some(0),
    },
    ShowcasePhotoSeed {
        image_url: "https://images.unsplash.com/photo-1503951914875-452162b0f3f1",
        description: "Barba bem aparada",
        service: Some(2),
        employee: Some(1),
    },
    ShowcasePhotoSeed {
        image_url: "https://images.unsplash.com/photo-1560066984-138dadb4c035",
        description: "Corte feminino longo",
        service: Some(5),
        employee: Some(3),
    },
    ShowcasePhotoSeed {
        image_url: "https://images.unsplash.com/photo-1562322140-8baeececf3df",
        description: "Coloração balayage",
        service: Some(7),
        employee: Some(4),
    },
    ShowcasePhotoSeed {
        image_url: "https://images.unsplash.com/photo-1585747860715-2ba37e788b70",
        description: "Trabalho do Marcelo",
        service: None,
        employee: Some(0),
    },
    ShowcasePhotoSeed {
        image_url: "https://images.unsplash.com/photo-1599351431202-1e0f0137899a",
        description: "Portfolio da Patricia",
        service: None,
        employee: Some(3),
    },
];
