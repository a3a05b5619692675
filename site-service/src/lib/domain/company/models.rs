/// The single company profile row.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: i64,
    pub profile: CompanyProfile,
}

/// Public contact details and branding of the company.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProfile {
    pub name: String,
    pub short_name: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub wechat: Option<String>,
    pub weibo: Option<String>,
    pub copyright_text: Option<String>,
    pub icp: Option<String>,
    pub business_hours: Option<String>,
    pub banner_images: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Default for CompanyProfile {
    /// Profile stored the first time one is needed.
    fn default() -> Self {
        Self {
            name: "福建省宜然焕新科技有限公司".to_string(),
            short_name: Some("宜然焕新".to_string()),
            logo: None,
            description: None,
            phone: Some("400-888-8888".to_string()),
            email: Some("contact@yiran-huanxin.com".to_string()),
            address: Some("福建省福州市鼓楼区".to_string()),
            wechat: None,
            weibo: None,
            copyright_text: Some("© 2024 福建省宜然焕新科技有限公司 版权所有".to_string()),
            icp: None,
            business_hours: Some("周一至周日 8:00-20:00".to_string()),
            banner_images: Vec::new(),
            latitude: Some(26.0745),
            longitude: Some(119.2965),
        }
    }
}

/// Sparse patch over the company profile; `Some(None)` clears an optional column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCompanyCommand {
    pub name: Option<String>,
    pub short_name: Option<Option<String>>,
    pub logo: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub email: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub wechat: Option<Option<String>>,
    pub weibo: Option<Option<String>>,
    pub copyright_text: Option<Option<String>>,
    pub icp: Option<Option<String>>,
    pub business_hours: Option<Option<String>>,
    pub banner_images: Option<Vec<String>>,
    pub latitude: Option<Option<f64>>,
    pub longitude: Option<Option<f64>>,
}

fn patch<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

impl UpdateCompanyCommand {
    pub fn apply(self, profile: &mut CompanyProfile) {
        patch(&mut profile.name, self.name);
        patch(&mut profile.short_name, self.short_name);
        patch(&mut profile.logo, self.logo);
        patch(&mut profile.description, self.description);
        patch(&mut profile.phone, self.phone);
        patch(&mut profile.email, self.email);
        patch(&mut profile.address, self.address);
        patch(&mut profile.wechat, self.wechat);
        patch(&mut profile.weibo, self.weibo);
        patch(&mut profile.copyright_text, self.copyright_text);
        patch(&mut profile.icp, self.icp);
        patch(&mut profile.business_hours, self.business_hours);
        patch(&mut profile.banner_images, self.banner_images);
        patch(&mut profile.latitude, self.latitude);
        patch(&mut profile.longitude, self.longitude);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_leaves_unnamed_fields() {
        let mut profile = CompanyProfile::default();
        UpdateCompanyCommand {
            phone: Some(Some("0591-88888888".to_string())),
            wechat: Some(Some("yiran-huanxin".to_string())),
            latitude: Some(None),
            banner_images: Some(vec!["/uploads/banner-1.jpg".to_string()]),
            ..Default::default()
        }
        .apply(&mut profile);

        assert_eq!(profile.phone.as_deref(), Some("0591-88888888"));
        assert_eq!(profile.wechat.as_deref(), Some("yiran-huanxin"));
        assert_eq!(profile.latitude, None);
        assert_eq!(profile.longitude, Some(119.2965));
        assert_eq!(profile.banner_images.len(), 1);
        assert_eq!(profile.name, CompanyProfile::default().name);
    }
}
