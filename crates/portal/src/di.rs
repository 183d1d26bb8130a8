use crate::{
    abstract_trait::{
        account::{DynAccountService, DynSchoolService},
        auth::DynAuthService,
        gateway::DynHttpGateway,
        profile::DynProfileService,
        user::DynUserService,
    },
    service::{AccountService, AuthService, ProfileService, SchoolService, UserService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub profile_service: DynProfileService,
    pub account_service: DynAccountService,
    pub school_service: DynSchoolService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("user_service", &"DynUserService")
            .field("profile_service", &"DynProfileService")
            .field("account_service", &"DynAccountService")
            .field("school_service", &"DynSchoolService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(gateway: DynHttpGateway) -> Self {
        let auth_service = Arc::new(AuthService::new(gateway.clone())) as DynAuthService;
        let user_service = Arc::new(UserService::new(gateway.clone())) as DynUserService;
        let profile_service = Arc::new(ProfileService::new(gateway.clone())) as DynProfileService;
        let account_service = Arc::new(AccountService::new(gateway.clone())) as DynAccountService;
        let school_service = Arc::new(SchoolService::new(gateway)) as DynSchoolService;

        Self {
            auth_service,
            user_service,
            profile_service,
            account_service,
            school_service,
        }
    }
}
