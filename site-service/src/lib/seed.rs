//! First-start data: the bootstrap superuser, optional demo content and the
//! company profile row.

use crate::config::SeedConfig;
use crate::domain::account::models::CreateAccountCommand;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::case::models::CreateCaseCommand;
use crate::domain::case::ports::CaseServicePort;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::news::models::CreateNewsCommand;
use crate::domain::news::ports::NewsServicePort;
use crate::domain::offering::models::CreateOfferingCommand;
use crate::domain::offering::models::Slug;
use crate::domain::offering::ports::OfferingServicePort;

pub struct Seeder<'a> {
    pub accounts: &'a dyn AccountServicePort,
    pub news: &'a dyn NewsServicePort,
    pub cases: &'a dyn CaseServicePort,
    pub offerings: &'a dyn OfferingServicePort,
    pub company: &'a dyn CompanyServicePort,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub admin_created: bool,
    pub news: usize,
    pub cases: usize,
    pub offerings: usize,
}

impl Seeder<'_> {
    /// Seed an empty database; a database with any account is left alone
    /// apart from making sure the company profile exists.
    pub async fn run(&self, config: &SeedConfig) -> anyhow::Result<SeedReport> {
        let mut report = SeedReport::default();

        let command = CreateAccountCommand {
            username: Username::new(config.admin_username.clone())?,
            email: EmailAddress::new(config.admin_email.clone())?,
            password: config.admin_password.clone(),
            is_superuser: true,
        };

        if let Some(admin) = self.accounts.ensure_bootstrap_account(command).await? {
            tracing::info!(username = %admin.username, "Bootstrap superuser created");
            report.admin_created = true;

            if config.demo_data {
                self.seed_demo_content(&mut report).await?;
            }
        }

        self.company.get_profile().await?;

        Ok(report)
    }

    async fn seed_demo_content(&self, report: &mut SeedReport) -> anyhow::Result<()> {
        for command in demo_news() {
            self.news.create_news(command).await?;
            report.news += 1;
        }
        for command in demo_cases() {
            self.cases.create_case(command).await?;
            report.cases += 1;
        }
        for command in demo_offerings()? {
            self.offerings.create_offering(command).await?;
            report.offerings += 1;
        }

        tracing::info!(
            news = report.news,
            cases = report.cases,
            offerings = report.offerings,
            "Demo content seeded"
        );
        Ok(())
    }
}

fn news(title: &str, summary: &str, content: &str, category: &str) -> CreateNewsCommand {
    CreateNewsCommand {
        title: title.to_string(),
        summary: Some(summary.to_string()),
        content: content.to_string(),
        cover_image: None,
        images: Vec::new(),
        category: category.to_string(),
        is_published: true,
    }
}

fn demo_news() -> Vec<CreateNewsCommand> {
    vec![
        news(
            "三棵树涂料荣获2024年度环保涂料十大品牌",
            "三棵树涂料凭借卓越的环保性能和品质，再次荣获年度环保涂料十大品牌称号。",
            "三棵树涂料凭借卓越的环保性能和品质，再次荣获年度环保涂料十大品牌称号。这是三棵树连续第五年获得此殊荣，充分体现了品牌在环保涂料领域的领先地位。",
            "行业动态",
        ),
        news(
            "宜然焕新完成福州某大型商业综合体焕新项目",
            "近日，我司成功完成福州某大型商业综合体的整体焕新项目，获得业主高度评价。",
            "近日，我司成功完成福州某大型商业综合体的整体焕新项目，项目面积超过5000平方米，施工周期仅用15天，获得业主高度评价。",
            "公司新闻",
        ),
        news(
            "墙面翻新需要注意的五个要点",
            "墙面翻新看似简单，但其中有很多细节需要注意。本文为您详细介绍墙面翻新的五个关键要点。",
            "墙面翻新需要注意的五个要点：\n\n1. 基层处理要到位\n2. 选择环保材料\n3. 注意施工环境\n4. 颜色搭配要协调\n5. 选择专业施工团队",
            "装修知识",
        ),
    ]
}

fn case(
    title: &str,
    description: &str,
    location: &str,
    service_type: &str,
    area: &str,
    is_featured: i32,
) -> CreateCaseCommand {
    CreateCaseCommand {
        title: title.to_string(),
        description: Some(description.to_string()),
        location: Some(location.to_string()),
        service_type: Some(service_type.to_string()),
        area: Some(area.to_string()),
        cover_image: None,
        images: Vec::new(),
        is_featured,
    }
}

fn demo_cases() -> Vec<CreateCaseCommand> {
    vec![
        case(
            "福州某小区全屋翻新",
            "120平米三居室全屋墙面翻新，采用三棵树净味墙面漆，施工周期3天，业主当天入住。",
            "福州市鼓楼区",
            "墙面翻新",
            "120㎡",
            1,
        ),
        case(
            "厦门办公室焕新改造",
            "200平米办公空间整体焕新，包含墙面、吊顶、地面处理，周末施工不影响正常办公。",
            "厦门市思明区",
            "商业空间",
            "200㎡",
            1,
        ),
        case(
            "泉州老房整体改造",
            "80平米老房整体改造，水电改造、厨卫翻新、墙面处理一站式服务，焕然一新。",
            "泉州市丰泽区",
            "旧房改造",
            "80㎡",
            1,
        ),
        case(
            "漳州别墅外墙翻新",
            "独栋别墅外墙全面翻新，防水处理加环保外墙漆，美观耐用。",
            "漳州市龙文区",
            "墙面翻新",
            "300㎡",
            0,
        ),
    ]
}

struct DemoOffering {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    icon: &'static str,
    features: [&'static str; 4],
    price_range: &'static str,
    duration: &'static str,
    is_featured: bool,
}

const DEMO_OFFERINGS: [DemoOffering; 5] = [
    DemoOffering {
        name: "墙面翻新",
        slug: "wall-renovation",
        description: "专业墙面翻新服务，采用三棵树环保涂料，无毒无味，即刷即住。适用于家庭住宅、办公室、商业空间等各类场所。",
        icon: "paintbrush",
        features: ["环保材料", "快速施工", "质保5年", "免费上门量房"],
        price_range: "15-35元/㎡",
        duration: "1-3天",
        is_featured: true,
    },
    DemoOffering {
        name: "旧房改造",
        slug: "old-house-renovation",
        description: "一站式旧房改造服务，涵盖水电改造、厨卫翻新、墙面处理等，让老房焕发新生。",
        icon: "home",
        features: ["整体规划", "水电改造", "厨卫翻新", "软装搭配"],
        price_range: "200-500元/㎡",
        duration: "7-15天",
        is_featured: true,
    },
    DemoOffering {
        name: "商业空间",
        slug: "commercial-space",
        description: "专业商业空间焕新服务，周末施工不影响营业，快速提升品牌形象。",
        icon: "building",
        features: ["夜间施工", "快速交付", "品牌定制", "一站式服务"],
        price_range: "20-50元/㎡",
        duration: "2-5天",
        is_featured: true,
    },
    DemoOffering {
        name: "外墙翻新",
        slug: "exterior-renovation",
        description: "外墙翻新服务，防水防霉，耐候性强，提升建筑外观和使用寿命。",
        icon: "sun",
        features: ["防水处理", "耐候涂层", "高空作业", "质保10年"],
        price_range: "30-60元/㎡",
        duration: "3-7天",
        is_featured: false,
    },
    DemoOffering {
        name: "定制服务",
        slug: "custom-service",
        description: "根据您的需求提供个性化定制服务，专业团队全程跟进，确保满意。",
        icon: "settings",
        features: ["个性定制", "专业设计", "全程跟进", "售后保障"],
        price_range: "面议",
        duration: "视情况而定",
        is_featured: false,
    },
];

fn demo_offerings() -> anyhow::Result<Vec<CreateOfferingCommand>> {
    DEMO_OFFERINGS
        .iter()
        .zip(1..)
        .map(|(demo, sort_order)| -> anyhow::Result<CreateOfferingCommand> {
            Ok(CreateOfferingCommand {
                name: demo.name.to_string(),
                slug: Slug::new(demo.slug.to_string())?,
                description: Some(demo.description.to_string()),
                icon: Some(demo.icon.to_string()),
                image: None,
                features: demo.features.iter().map(|f| f.to_string()).collect(),
                price_range: Some(demo.price_range.to_string()),
                duration: Some(demo.duration.to_string()),
                is_featured: demo.is_featured,
                sort_order,
            })
        })
        .collect()
}
