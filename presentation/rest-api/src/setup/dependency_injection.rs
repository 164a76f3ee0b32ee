use std::sync::Arc;

use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::farmer::repository::FarmerRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use security::argon2_password_hasher::Argon2PasswordHasher;
use security::jwt_token_service::JwtTokenService;
use security::token_config::TokenConfig;

use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::farmer::create::CreateFarmerUseCaseImpl;
use business::application::farmer::delete::DeleteFarmerUseCaseImpl;
use business::application::farmer::get_all::GetAllFarmersUseCaseImpl;
use business::application::farmer::get_by_id::GetFarmerByIdUseCaseImpl;
use business::application::farmer::get_by_user_id::GetFarmerByUserIdUseCaseImpl;
use business::application::farmer::update::UpdateFarmerUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::hydrator::RepositoryEntityHydrator;
use business::application::product::search::SearchProductsUseCaseImpl;
use business::application::user::get_by_id::GetUserByIdUseCaseImpl;
use business::application::user::get_current::GetCurrentUserUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;
use business::domain::auth::services::TokenService;

use crate::api::category::routes::CategoryApi;
use crate::api::farmer::routes::FarmerApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::user::routes::UserApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub category_api: CategoryApi,
    pub user_api: UserApi,
    pub farmer_api: FarmerApi,
    /// Shared with the bearer-token checker through request data.
    pub token_service: Arc<dyn TokenService>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, token_config: &TokenConfig) -> anyhow::Result<Self> {
        let product_logger = Arc::new(TracingLogger::new("product"));
        let category_logger = Arc::new(TracingLogger::new("category"));
        let user_logger = Arc::new(TracingLogger::new("user"));
        let farmer_logger = Arc::new(TracingLogger::new("farmer"));

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool.clone()));
        let farmer_repository = Arc::new(FarmerRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));
        let password_hasher = Arc::new(Argon2PasswordHasher::new());
        let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(token_config));

        let hydrator = Arc::new(RepositoryEntityHydrator {
            category_repository: category_repository.clone(),
            farmer_repository: farmer_repository.clone(),
            logger: product_logger.clone(),
        });

        // Product use cases
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository.clone(),
            hydrator: hydrator.clone(),
            logger: product_logger.clone(),
        });
        let get_product_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository,
            hydrator,
            logger: product_logger,
        });

        // Category use cases
        let get_all_categories_use_case = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository,
            logger: category_logger,
        });

        // User use cases
        let register_use_case = Arc::new(RegisterUserUseCaseImpl {
            repository: user_repository.clone(),
            password_hasher: password_hasher.clone(),
            logger: user_logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: user_repository.clone(),
            password_hasher,
            token_service: token_service.clone(),
            logger: user_logger.clone(),
        });
        let get_current_user_use_case = Arc::new(GetCurrentUserUseCaseImpl {
            repository: user_repository.clone(),
            logger: user_logger.clone(),
        });
        let get_user_use_case = Arc::new(GetUserByIdUseCaseImpl {
            repository: user_repository,
            logger: user_logger,
        });

        // Farmer use cases
        let create_farmer_use_case = Arc::new(CreateFarmerUseCaseImpl {
            repository: farmer_repository.clone(),
            logger: farmer_logger.clone(),
        });
        let get_all_farmers_use_case = Arc::new(GetAllFarmersUseCaseImpl {
            repository: farmer_repository.clone(),
            logger: farmer_logger.clone(),
        });
        let get_farmer_use_case = Arc::new(GetFarmerByIdUseCaseImpl {
            repository: farmer_repository.clone(),
            logger: farmer_logger.clone(),
        });
        let get_farmer_by_user_use_case = Arc::new(GetFarmerByUserIdUseCaseImpl {
            repository: farmer_repository.clone(),
            logger: farmer_logger.clone(),
        });
        let update_farmer_use_case = Arc::new(UpdateFarmerUseCaseImpl {
            repository: farmer_repository.clone(),
            logger: farmer_logger.clone(),
        });
        let delete_farmer_use_case = Arc::new(DeleteFarmerUseCaseImpl {
            repository: farmer_repository,
            logger: farmer_logger,
        });

        Ok(Self {
            health_api: HealthApi::new(),
            product_api: ProductApi::new(search_use_case, get_product_use_case),
            category_api: CategoryApi::new(get_all_categories_use_case),
            user_api: UserApi::new(
                register_use_case,
                login_use_case,
                get_current_user_use_case,
                get_user_use_case,
            ),
            farmer_api: FarmerApi::new(
                create_farmer_use_case,
                get_all_farmers_use_case,
                get_farmer_use_case,
                get_farmer_by_user_use_case,
                update_farmer_use_case,
                delete_farmer_use_case,
            ),
            token_service,
        })
    }
}
