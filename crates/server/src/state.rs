use std::sync::Arc;

use sea_orm::DatabaseConnection;

use service::property::repo::seaorm::SeaOrmPropertyRepository;
use service::property::service::PropertyService;
use service::realtor::repo::seaorm::SeaOrmRealtorRepository;
use service::realtor::service::RealtorService;
use service::user::repo::seaorm::SeaOrmUserRepository;
use service::user::service::UserService;

pub type Properties = PropertyService<SeaOrmPropertyRepository, SeaOrmRealtorRepository>;
pub type Realtors = RealtorService<SeaOrmRealtorRepository, SeaOrmPropertyRepository>;
pub type Users = UserService<SeaOrmUserRepository>;

/// Shared handler state: one service per entity kind, all backed by the
/// same connection pool.
#[derive(Clone)]
pub struct ServerState {
    pub properties: Arc<Properties>,
    pub realtors: Arc<Realtors>,
    pub users: Arc<Users>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let property_repo = Arc::new(SeaOrmPropertyRepository { db: db.clone() });
        let realtor_repo = Arc::new(SeaOrmRealtorRepository { db: db.clone() });
        let user_repo = Arc::new(SeaOrmUserRepository { db });
        Self {
            properties: Arc::new(PropertyService::new(Arc::clone(&property_repo), Arc::clone(&realtor_repo))),
            realtors: Arc::new(RealtorService::new(realtor_repo, property_repo)),
            users: Arc::new(UserService::new(user_repo)),
        }
    }
}
